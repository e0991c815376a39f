use algoviz_core::format::OutputFormat;
use algoviz_core::grid::Position;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a `row,col` cell coordinate
pub fn parse_position(s: &str) -> std::result::Result<Position, String> {
    s.parse::<Position>().map_err(|e| e.to_string())
}

/// Parse a comma-separated list of integers
pub fn parse_values(s: &str) -> std::result::Result<Vec<i64>, String> {
    let values = s
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>()
                .map_err(|_| format!("'{}' is not an integer", part))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if values.is_empty() {
        return Err("expected at least one value".to_string());
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_values() {
        assert_eq!(parse_values("5,3,8,1,2").unwrap(), vec![5, 3, 8, 1, 2]);
        assert_eq!(parse_values(" 4, -1 ,0 ").unwrap(), vec![4, -1, 0]);
        assert_eq!(parse_values("7").unwrap(), vec![7]);
        assert!(parse_values("").is_err());
        assert!(parse_values("1,two,3").is_err());
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("3,4").unwrap(), Position::new(3, 4));
        assert!(parse_position("3").is_err());
        assert!(parse_position("-1,2").is_err());
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("json").unwrap(), OutputFormat::Json);
        assert!(parse_output_format("yaml").is_err());
    }
}
