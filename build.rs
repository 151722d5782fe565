use std::fs;

fn main() {
    // The bundled config is embedded with include_str!, so reject a broken one here
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={config_path}");

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {e}"),
    };
    let Some(html) = table.get("html").and_then(toml::Value::as_table) else {
        panic!("default_config.toml is missing the [html] table");
    };

    // Every HtmlConfig field is a string
    for (key, value) in html {
        if !value.is_str() {
            panic!("default_config.toml: html.{key} must be a string");
        }
    }
}
