pub fn render_health(flag_count: usize) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>OMD Maintenance Health</title>
  </head>
  <body>
    <h1>OMD Maintenance</h1>
    <p>Status: ok</p>
    <p>Configuration flags loaded: {flag_count}</p>
  </body>
</html>
"#
    )
}
