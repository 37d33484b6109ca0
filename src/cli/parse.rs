use mazepath_core::format::OutputFormat;
use mazepath_core::maze::Juncture;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a `x,y` cell from string
pub fn parse_juncture(s: &str) -> std::result::Result<Juncture, String> {
    s.parse::<Juncture>().map_err(|e| e.to_string())
}
