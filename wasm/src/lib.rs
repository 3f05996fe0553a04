use learning_path_layout::layout_dump::ChartDump;
use learning_path_layout::{build_layout, parse_document};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutOptions {
    format: Option<String>,
    pretty: Option<bool>,
}

fn layout_to_json(input: &str, options: LayoutOptions) -> Result<String, String> {
    let document = parse_document(input).map_err(|error| error.to_string())?;
    let layout = build_layout(&document.items, &document.edges);
    let pretty = options.pretty.unwrap_or(false);
    let result = match options.format.as_deref() {
        None | Some("layout") => to_json(&layout, pretty),
        Some("chart") => to_json(&ChartDump::from_layout(&layout, &document.items), pretty),
        Some(other) => return Err(format!("unknown format `{other}`")),
    };
    result.map_err(|error| error.to_string())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

#[wasm_bindgen]
pub fn build_learning_path_layout(
    input_json: &str,
    options_json: Option<String>,
) -> Result<String, JsValue> {
    let options = if let Some(raw_options) = options_json {
        serde_json::from_str::<LayoutOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string()))?
    } else {
        LayoutOptions::default()
    };

    layout_to_json(input_json, options).map_err(|error| JsValue::from_str(&error))
}
