use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Geometry constants of the column layout.
///
/// `build_layout` always uses [`LayoutConfig::DEFAULT`]; a custom value is only
/// seen through `compute_layout`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    pub column_gap: f64,
    pub row_gap: f64,
    pub left_padding: f64,
    pub top_padding: f64,
    pub bottom_padding: f64,
    pub right_padding: f64,
    pub min_canvas_height: u32,
    pub min_canvas_width: u32,
    pub min_viewport_height: u32,
    pub max_viewport_height: u32,
}

impl LayoutConfig {
    pub const DEFAULT: LayoutConfig = LayoutConfig {
        column_gap: 280.0,
        row_gap: 96.0,
        left_padding: 96.0,
        top_padding: 72.0,
        bottom_padding: 72.0,
        right_padding: 96.0,
        min_canvas_height: 380,
        min_canvas_width: 980,
        min_viewport_height: 396,
        max_viewport_height: 640,
    };

    pub fn validate(&self) -> Result<(), ConfigError> {
        let spacings = [
            ("columnGap", self.column_gap),
            ("rowGap", self.row_gap),
            ("leftPadding", self.left_padding),
            ("topPadding", self.top_padding),
            ("bottomPadding", self.bottom_padding),
            ("rightPadding", self.right_padding),
        ];
        for (field, value) in spacings {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidSpacing { field, value });
            }
        }
        if self.min_viewport_height > self.max_viewport_height {
            return Err(ConfigError::ViewportRange {
                min: self.min_viewport_height,
                max: self.max_viewport_height,
            });
        }
        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

impl NumberOrString {
    fn as_f64(&self) -> Option<f64> {
        match self {
            NumberOrString::Number(val) => Some(*val),
            NumberOrString::String(val) => val.trim().parse::<f64>().ok(),
        }
    }

    fn as_u32(&self) -> Option<u32> {
        self.as_f64()
            .filter(|val| val.is_finite() && *val >= 0.0)
            .map(|val| val.round() as u32)
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct LayoutConfigFile {
    column_gap: Option<NumberOrString>,
    row_gap: Option<NumberOrString>,
    left_padding: Option<NumberOrString>,
    top_padding: Option<NumberOrString>,
    bottom_padding: Option<NumberOrString>,
    right_padding: Option<NumberOrString>,
    min_canvas_height: Option<NumberOrString>,
    min_canvas_width: Option<NumberOrString>,
    min_viewport_height: Option<NumberOrString>,
    max_viewport_height: Option<NumberOrString>,
}

#[derive(Debug, Deserialize, Default)]
struct OutputConfigFile {
    pretty: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    layout: Option<LayoutConfigFile>,
    output: Option<OutputConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile =
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if let Some(file) = parsed.layout {
        apply_layout_overrides(&mut config.layout, file);
    }
    if let Some(output) = parsed.output {
        if let Some(v) = output.pretty {
            config.output.pretty = v;
        }
    }

    config.layout.validate()?;
    tracing::debug!(path = %path.display(), layout = ?config.layout, "loaded layout config");
    Ok(config)
}

fn apply_layout_overrides(layout: &mut LayoutConfig, file: LayoutConfigFile) {
    // Unparsable values are ignored; non-finite ones surface in `validate`.
    let spacing = |value: Option<NumberOrString>, slot: &mut f64| {
        if let Some(v) = value.as_ref().and_then(NumberOrString::as_f64) {
            *slot = v;
        }
    };
    spacing(file.column_gap, &mut layout.column_gap);
    spacing(file.row_gap, &mut layout.row_gap);
    spacing(file.left_padding, &mut layout.left_padding);
    spacing(file.top_padding, &mut layout.top_padding);
    spacing(file.bottom_padding, &mut layout.bottom_padding);
    spacing(file.right_padding, &mut layout.right_padding);

    let bound = |value: Option<NumberOrString>, slot: &mut u32| {
        if let Some(v) = value.as_ref().and_then(NumberOrString::as_u32) {
            *slot = v;
        }
    };
    bound(file.min_canvas_height, &mut layout.min_canvas_height);
    bound(file.min_canvas_width, &mut layout.min_canvas_width);
    bound(file.min_viewport_height, &mut layout.min_viewport_height);
    bound(file.max_viewport_height, &mut layout.max_viewport_height);
}
