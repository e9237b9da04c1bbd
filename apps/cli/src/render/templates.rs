// HTML page templates. Rendered through Tera; names ending in `.html`
// are autoescaped, so only values piped through `safe` are emitted raw.

pub const JOB_LIST_TEMPLATE_NAME: &str = "job_list.html";
pub const CHART_PAGE_TEMPLATE_NAME: &str = "chart_page.html";

/// Plotly.js bundle referenced by every chart page.
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Recommended jobs page. Context: `jobs` (list of titles), `skills`
/// (possibly empty list), `generated_at` (display string).
pub const JOB_LIST_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Job Recommendations</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            font-size: 1.5rem;
            margin: 20px;
        }
        h1 {
            color: #333;
        }
        ol {
            margin-top: 20px;
        }
        ol li {
            padding: 5px 0;
        }
        .meta {
            color: #777;
            font-size: 1rem;
        }
    </style>
</head>
<body>
    <h1>These are recommended jobs based on your skills</h1>
    {% if skills %}<p class="meta">Skills: {{ skills | join(sep=", ") }}</p>{% endif %}
    <ol>
        {% for job in jobs %}<li>{{ job }}</li>{% endfor %}
    </ol>
    <p class="meta">Generated {{ generated_at }}</p>
</body>
</html>"#;

/// Standalone chart page. Context: `title`, `div_id`, `plotly_src`, and
/// `figure` (script-safe JSON, inserted raw). Everything the chart needs
/// lives inside `<body>` so the body can be spliced into another page.
pub const CHART_PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8" />
    <title>{{ title }}</title>
</head>
<body>
    <div>
        <script type="text/javascript" src="{{ plotly_src | safe }}"></script>
        <div id="{{ div_id }}" class="plotly-graph-div" style="width:100%;"></div>
        <script type="text/javascript">
            Plotly.newPlot("{{ div_id }}", {{ figure | safe }});
        </script>
    </div>
</body>
</html>"#;
