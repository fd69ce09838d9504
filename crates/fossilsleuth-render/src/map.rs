/// Interactive fossil map: a single self-contained HTML document.
///
/// Find sites are drawn on a Natural Earth graticule as SVG markers coloured
/// by recorded length. The page carries its own data (embedded JSON) and
/// script, so it opens offline: mouse wheel zooms around the cursor, drag
/// pans, and hovering a marker shows its occurrence number and details.
use crate::theme::{hex, scale_color, scale_stops, MISSING, OCEAN};
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use fossilsleuth_core::analysis::{natural_earth, GeoProjection};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Projected units to SVG user units.
const SCALE: f64 = 200.0;
/// Graticule spacing in degrees.
const GRATICULE_STEP: i32 = 30;
/// Sampling step along graticule lines, in degrees.
const SAMPLE_STEP: i32 = 2;
/// Marker radius at zoom level 1, in SVG user units.
const MARKER_RADIUS: f64 = 3.0;

/// Half-extent of the projected world in SVG units: `(x, y)`.
fn half_extent() -> (f64, f64) {
    let (x, _) = natural_earth(180.0, 0.0);
    let (_, y) = natural_earth(0.0, 90.0);
    (x * SCALE, y * SCALE)
}

/// Projected point in SVG coordinates (y grows downward).
fn to_svg(lng: f64, lat: f64) -> (f64, f64) {
    let (x, y) = natural_earth(lng, lat);
    (x * SCALE, -y * SCALE)
}

/// SVG path through `(lng, lat)` samples.
fn polyline(samples: impl Iterator<Item = (f64, f64)>) -> String {
    let mut d = String::new();
    for (i, (lng, lat)) in samples.enumerate() {
        let (x, y) = to_svg(lng, lat);
        let cmd = if i == 0 { 'M' } else { 'L' };
        d.push_str(&format!("{cmd}{x:.2},{y:.2}"));
    }
    d
}

/// Meridians and parallels every [`GRATICULE_STEP`] degrees.
pub fn graticule_path() -> String {
    let mut d = String::new();
    for lng in (-180..=180).step_by(GRATICULE_STEP as usize) {
        d.push_str(&polyline(
            (-90..=90)
                .step_by(SAMPLE_STEP as usize)
                .map(|lat| (lng as f64, lat as f64)),
        ));
    }
    for lat in (-90 + GRATICULE_STEP..90).step_by(GRATICULE_STEP as usize) {
        d.push_str(&polyline(
            (-180..=180)
                .step_by(SAMPLE_STEP as usize)
                .map(|lng| (lng as f64, lat as f64)),
        ));
    }
    d
}

/// Closed outline of the projected globe.
pub fn outline_path() -> String {
    let east = (-90..=90).step_by(SAMPLE_STEP as usize).map(|lat| (180.0, lat as f64));
    let west = (-90..=90)
        .rev()
        .step_by(SAMPLE_STEP as usize)
        .map(|lat| (-180.0, lat as f64));
    let mut d = polyline(east.chain(west));
    d.push('Z');
    d
}

/// One marker as serialized into the page.
#[derive(Debug, Serialize)]
pub struct MapMarker {
    pub id: u64,
    pub name: String,
    pub lng: f64,
    pub lat: f64,
    pub x: f64,
    pub y: f64,
    pub length: Option<f64>,
    pub color: String,
}

pub fn markers(projection: &GeoProjection) -> Vec<MapMarker> {
    projection
        .points
        .iter()
        .map(|p| {
            let (x, y) = (p.projected.0 * SCALE, -p.projected.1 * SCALE);
            let color = match (p.length_m, projection.length_range) {
                (Some(len), Some((lo, hi))) => scale_color(len, lo, hi),
                _ => MISSING,
            };
            MapMarker {
                id: p.occurrence_no,
                name: p.name.to_string(),
                lng: p.lng,
                lat: p.lat,
                x: (x * 100.0).round() / 100.0,
                y: (y * 100.0).round() / 100.0,
                length: p.length_m,
                color: hex(color),
            }
        })
        .collect()
}

/// JSON safe to inline inside a `<script>` element.
fn script_json<T: Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value).context("failed to serialize map data")?;
    Ok(json.replace("</", "<\\/"))
}

/// Colour bar gradient stops as SVG `<stop>` elements, low at the bottom.
fn gradient_stops() -> String {
    let mut s = String::new();
    for (offset, color) in scale_stops() {
        s.push_str(&format!(
            r#"<stop offset="{:.3}" stop-color="{}"/>"#,
            1.0 - offset,
            hex(color)
        ));
    }
    s
}

/// Assemble the full HTML document.
pub fn build_html(projection: &GeoProjection, generated: DateTime<Local>) -> Result<String> {
    let (hx, hy) = half_extent();
    let pad = 10.0;
    let view_box = format!(
        "{:.2} {:.2} {:.2} {:.2}",
        -hx - pad,
        -hy - pad,
        2.0 * (hx + pad),
        2.0 * (hy + pad)
    );

    let data = script_json(&markers(projection))?;
    let (range_lo, range_hi) = projection.length_range.unwrap_or((0.0, 0.0));
    let has_range = projection.length_range.is_some();

    let mut html = String::with_capacity(64 * 1024 + data.len());
    html.push_str(HEAD);
    html.push_str(&format!(
        r##"<body>
<header><h1>Fossil records by length</h1><p>{count} records &middot; Natural Earth projection &middot; generated {generated}</p></header>
<div id="stage">
<svg id="map" viewBox="{view_box}" preserveAspectRatio="xMidYMid meet" xmlns="http://www.w3.org/2000/svg">
<g id="world">
<path class="sphere" d="{outline}" fill="{ocean}"/>
<path class="graticule" d="{graticule}"/>
<path class="sphere-edge" d="{outline}"/>
<g id="markers"></g>
</g>
</svg>
<div id="tooltip" hidden></div>
<aside id="legend"{legend_hidden}>
<div class="legend-title">Length (in m)</div>
<svg width="28" height="200" viewBox="0 0 28 200"><defs><linearGradient id="scale" x1="0" y1="0" x2="0" y2="1">{stops}</linearGradient></defs><rect x="4" y="0" width="20" height="200" fill="url(#scale)"/></svg>
<div class="legend-ticks"><span>{hi}</span><span>{lo}</span></div>
<div class="legend-missing"><span class="swatch" style="background:{missing}"></span>not recorded</div>
</aside>
</div>
<script type="application/json" id="fossil-data">{data}</script>
"##,
        count = projection.points.len(),
        generated = generated.format("%Y-%m-%d %H:%M"),
        view_box = view_box,
        outline = outline_path(),
        ocean = hex(OCEAN),
        graticule = graticule_path(),
        legend_hidden = if has_range { "" } else { " hidden" },
        stops = gradient_stops(),
        hi = format_tick(range_hi),
        lo = format_tick(range_lo),
        missing = hex(MISSING),
        data = data,
    ));
    html.push_str(&format!("<script>const MARKER_RADIUS = {MARKER_RADIUS};\n"));
    html.push_str(SCRIPT);
    html.push_str("</script>\n</body>\n</html>\n");
    Ok(html)
}

fn format_tick(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}

/// Write the interactive map to `path`.
pub fn render(path: &Path, projection: &GeoProjection) -> Result<()> {
    let html = build_html(projection, Local::now())?;
    debug!("Writing {} byte map to {}", html.len(), path.display());
    std::fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))
}

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Fossil records by length</title>
<style>
html, body { margin: 0; height: 100%; font-family: -apple-system, "Segoe UI", Helvetica, Arial, sans-serif; color: #2a3f5f; background: #fff; }
header { padding: 10px 18px 4px; }
header h1 { font-size: 18px; margin: 0; font-weight: 600; }
header p { font-size: 12px; margin: 2px 0 0; color: #6b7a90; }
#stage { position: absolute; top: 56px; left: 0; right: 0; bottom: 0; }
#map { width: 100%; height: 100%; cursor: grab; user-select: none; }
#map.dragging { cursor: grabbing; }
.graticule { fill: none; stroke: #d7dce5; stroke-width: 0.5; vector-effect: non-scaling-stroke; }
.sphere-edge { fill: none; stroke: #8a96a8; stroke-width: 1; vector-effect: non-scaling-stroke; }
.marker { stroke: #ffffff; stroke-width: 0.6; vector-effect: non-scaling-stroke; opacity: 0.85; }
.marker:hover { stroke: #2a3f5f; stroke-width: 1.5; opacity: 1; }
#tooltip { position: absolute; pointer-events: none; background: rgba(255,255,255,0.96); border: 1px solid #c9d1dd; border-radius: 4px; padding: 6px 8px; font-size: 12px; line-height: 1.4; box-shadow: 0 1px 4px rgba(0,0,0,0.15); white-space: nowrap; }
#tooltip b { font-size: 13px; }
#legend { position: absolute; right: 18px; top: 20px; font-size: 12px; background: rgba(255,255,255,0.9); padding: 6px 8px; border-radius: 4px; }
#legend[hidden] { display: none; }
.legend-title { font-weight: 600; margin-bottom: 4px; }
#legend svg { float: left; }
.legend-ticks { display: flex; flex-direction: column; justify-content: space-between; height: 200px; margin-left: 32px; }
.legend-missing { clear: both; padding-top: 8px; }
.swatch { display: inline-block; width: 10px; height: 10px; border-radius: 50%; margin-right: 6px; vertical-align: middle; }
</style>
</head>
"#;

const SCRIPT: &str = r#"(function () {
  "use strict";
  const SVG_NS = "http://www.w3.org/2000/svg";
  const svg = document.getElementById("map");
  const world = document.getElementById("world");
  const layer = document.getElementById("markers");
  const tooltip = document.getElementById("tooltip");
  const stage = document.getElementById("stage");
  const records = JSON.parse(document.getElementById("fossil-data").textContent);

  let k = 1, tx = 0, ty = 0;

  for (const r of records) {
    const c = document.createElementNS(SVG_NS, "circle");
    c.setAttribute("class", "marker");
    c.setAttribute("cx", r.x);
    c.setAttribute("cy", r.y);
    c.setAttribute("r", MARKER_RADIUS);
    c.setAttribute("fill", r.color);
    c.addEventListener("mouseenter", () => showTip(r));
    c.addEventListener("mousemove", moveTip);
    c.addEventListener("mouseleave", () => { tooltip.hidden = true; });
    layer.appendChild(c);
  }

  function row(label, value) {
    const div = document.createElement("div");
    div.textContent = label + ": " + value;
    return div;
  }

  function showTip(r) {
    tooltip.replaceChildren();
    const title = document.createElement("b");
    title.textContent = String(r.id);
    tooltip.appendChild(title);
    tooltip.appendChild(row("name", r.name));
    tooltip.appendChild(row("lat", r.lat));
    tooltip.appendChild(row("lng", r.lng));
    tooltip.appendChild(row("Length (in m)", r.length === null ? "not recorded" : r.length));
    tooltip.hidden = false;
  }

  function moveTip(ev) {
    const box = stage.getBoundingClientRect();
    tooltip.style.left = (ev.clientX - box.left + 12) + "px";
    tooltip.style.top = (ev.clientY - box.top + 12) + "px";
  }

  function apply() {
    world.setAttribute("transform", "translate(" + tx + "," + ty + ") scale(" + k + ")");
    for (const c of layer.children) c.setAttribute("r", MARKER_RADIUS / Math.sqrt(k));
  }

  function toUser(ev) {
    const pt = svg.createSVGPoint();
    pt.x = ev.clientX;
    pt.y = ev.clientY;
    return pt.matrixTransform(svg.getScreenCTM().inverse());
  }

  svg.addEventListener("wheel", (ev) => {
    ev.preventDefault();
    const p = toUser(ev);
    const factor = Math.exp(-ev.deltaY * 0.0015);
    const next = Math.min(40, Math.max(1, k * factor));
    const f = next / k;
    tx = p.x - (p.x - tx) * f;
    ty = p.y - (p.y - ty) * f;
    k = next;
    if (k === 1) { tx = 0; ty = 0; }
    apply();
  }, { passive: false });

  let drag = null;
  svg.addEventListener("mousedown", (ev) => {
    drag = { start: toUser(ev), tx: tx, ty: ty };
    svg.classList.add("dragging");
  });
  window.addEventListener("mousemove", (ev) => {
    if (!drag) return;
    const p = toUser(ev);
    tx = drag.tx + (p.x - drag.start.x);
    ty = drag.ty + (p.y - drag.start.y);
    apply();
  });
  window.addEventListener("mouseup", () => {
    drag = null;
    svg.classList.remove("dragging");
  });
  svg.addEventListener("dblclick", () => { k = 1; tx = 0; ty = 0; apply(); });
})();
"#;
