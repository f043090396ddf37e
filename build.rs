fn main() {
    // Rerun if frontend changes
    println!("cargo:rerun-if-changed=frontend/");

    // rust-embed needs the folder to exist
    let frontend_path = std::path::Path::new("frontend");
    if !frontend_path.join("index.html").exists() {
        eprintln!("Warning: frontend/index.html not found, embedding a placeholder.");

        std::fs::create_dir_all("frontend").ok();
        std::fs::write(
            "frontend/index.html",
            r#"<!DOCTYPE html>
<html>
<head><title>HTTP Playground</title></head>
<body>
    <h1>HTTP Playground</h1>
    <p>API is running. The page was not embedded; use <code>POST /api/send</code>.</p>
</body>
</html>"#,
        )
        .ok();
    }
}
