use crate::data::model::DelayMetric;

/// Page heading.
pub const PAGE_TITLE: &str = "Flight Delay Time Statistics";

const PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

// ---------------------------------------------------------------------------
// Page layout
// ---------------------------------------------------------------------------

/// Render the dashboard page.
///
/// Layout: title, year input, then `[carrier | weather]`,
/// `[nas | security]` and a wide `[late aircraft]` row. The script fetches
/// `/api/charts` on load and whenever the year changes.
pub fn render_page(default_year: &str) -> String {
    let [carrier, weather, nas, security, late] = DelayMetric::ALL.map(DelayMetric::element_id);
    let year = escape_attr(default_year);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{PAGE_TITLE}</title>
<script src="{PLOTLY_SRC}"></script>
<style>
  body {{ font-family: sans-serif; margin: 0 24px; }}
  h1 {{ text-align: center; color: #503D36; font-size: 30px; }}
  .year {{ font-size: 30px; }}
  .year input {{ height: 35px; font-size: 30px; }}
  .error {{ color: #b00020; font-size: 18px; min-height: 24px; }}
  .row {{ display: flex; }}
  .row > div {{ flex: 1; min-height: 450px; }}
  .wide {{ width: 80%; min-height: 450px; }}
</style>
</head>
<body>
<h1>{PAGE_TITLE}</h1>
<div class="year">Input Year: <input id="year-input" type="number" value="{year}"></div>
<div id="year-error" class="error"></div>
<br>
<div class="row"><div id="{carrier}"></div><div id="{weather}"></div></div>
<div class="row"><div id="{nas}"></div><div id="{security}"></div></div>
<div id="{late}" class="wide"></div>
<script>
(function () {{
  const input = document.getElementById('year-input');
  const error = document.getElementById('year-error');

  function draw(chart) {{
    const traces = chart.series.map(function (s) {{
      return {{
        type: 'scatter',
        mode: 'lines',
        name: s.name,
        line: {{ color: s.color }},
        x: s.points.map(function (p) {{ return p.month; }}),
        y: s.points.map(function (p) {{ return p.value; }}),
      }};
    }});
    Plotly.react(chart.id, traces, {{
      title: {{ text: chart.title }},
      xaxis: {{ title: {{ text: chart.x_field }} }},
      yaxis: {{ title: {{ text: chart.y_field }} }},
      legend: {{ title: {{ text: chart.series_key }} }},
    }});
  }}

  async function refresh() {{
    const response = await fetch('/api/charts?year=' + encodeURIComponent(input.value));
    const body = await response.json();
    if (!response.ok) {{
      error.textContent = body.error;
      return;
    }}
    error.textContent = '';
    body.charts.forEach(draw);
  }}

  input.addEventListener('input', refresh);
  refresh();
}})();
</script>
</body>
</html>
"#
    )
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_has_input_and_five_chart_areas() {
        let html = render_page("2011");
        assert!(html.contains(PAGE_TITLE));
        assert!(html.contains(r#"id="year-input" type="number" value="2011""#));
        for metric in DelayMetric::ALL {
            assert!(
                html.contains(&format!(r#"id="{}""#, metric.element_id())),
                "missing {metric}"
            );
        }
        assert!(html.contains(r#"<div id="late-aircraft-delay" class="wide">"#));
    }

    #[test]
    fn default_year_is_escaped() {
        let html = render_page(r#"2011"><script>"#);
        assert!(html.contains("2011&quot;&gt;&lt;script&gt;"));
    }
}
