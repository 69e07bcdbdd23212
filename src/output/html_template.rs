//! HTML template constants for the `HtmlFormatter`.
//!
//! `{{TITLE}}` in the header is replaced with the escaped document title.

/// HTML document head and page styles.
pub const HTML_HEADER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{TITLE}}</title>
    <style>
        :root {
            --color-bg: #f8fafc;
            --color-card: #ffffff;
            --color-border: #e2e8f0;
            --color-text: #1e293b;
            --color-text-muted: #64748b;
            --color-trend-up: #16a34a;
            --color-trend-down: #dc2626;
            --color-error: #b91c1c;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: var(--color-bg);
            color: var(--color-text);
            line-height: 1.6;
            padding: 2rem;
        }
        .container { max-width: 1200px; margin: 0 auto; }
        h1 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1.5rem; color: var(--color-text); }
        h2 { font-size: 1.125rem; font-weight: 600; color: var(--color-text); }
        .chart-card { background: var(--color-card); border-radius: 0.5rem; padding: 1.25rem; border: 1px solid var(--color-border); margin-bottom: 1.5rem; }
        .chart-card svg { width: 100%; height: auto; }
        .chart-card svg rect { transition: opacity 0.15s ease; }
        .chart-card svg rect:hover { opacity: 0.85; }
        .card-header { display: flex; justify-content: space-between; align-items: flex-start; gap: 1rem; margin-bottom: 1rem; }
        .description { font-size: 0.875rem; color: var(--color-text-muted); }
        .export-btn { padding: 0.375rem 0.75rem; border: 1px solid var(--color-border); border-radius: 0.375rem; font-size: 0.8125rem; color: var(--color-text); text-decoration: none; white-space: nowrap; }
        .export-btn:hover { background: var(--color-bg); }
        .table-container { overflow-x: auto; }
        table { width: 100%; border-collapse: collapse; }
        th, td { padding: 0.5rem 0.75rem; border-bottom: 1px solid var(--color-border); font-size: 0.875rem; }
        th { font-weight: 600; color: var(--color-text-muted); }
        td { font-variant-numeric: tabular-nums; }
        tr:last-child td { border-bottom: none; }
        tbody tr:hover { background: var(--color-bg); }
        .align-left { text-align: left; }
        .align-center { text-align: center; }
        .align-right { text-align: right; }
        .trend { margin-top: 0.75rem; font-size: 0.875rem; font-weight: 500; }
        .trend.up { color: var(--color-trend-up); }
        .trend.down { color: var(--color-trend-down); }
        .caption { margin-top: 0.5rem; font-size: 0.75rem; color: var(--color-text-muted); }
        .chart-error { padding: 1rem; border: 1px solid var(--color-error); border-radius: 0.375rem; color: var(--color-error); font-size: 0.875rem; }
        .no-results { padding: 2rem; text-align: center; color: var(--color-text-muted); }
        .footer { margin-top: 2rem; padding-top: 1rem; border-top: 1px solid var(--color-border); font-size: 0.75rem; color: var(--color-text-muted); text-align: center; }
        @media print {
            body { background: white; color: black; padding: 1rem; }
            .chart-card { border: 1px solid #333; break-inside: avoid; }
            .export-btn { display: none; }
        }
    </style>
</head>
<body>
    <div class="container">
"#;

/// HTML document footer.
pub const HTML_FOOTER: &str = r#"        <div class="footer">
            Generated by <strong>finchart</strong>
        </div>
    </div>
</body>
</html>
"#;
