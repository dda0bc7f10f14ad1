// Standard library
use std::net::SocketAddr;
use std::time::Duration;

// Current module imports
use super::constants::LONG_FLAGS;

pub fn default_log_level() -> String {
    "info".to_string()
}

/// Parses durations of the form `<number><unit>`, where unit is one of
/// `ms`, `s`, `m` or `h`. Fractional values such as `1.5s` are accepted.
pub fn parse_duration(value: &str) -> Option<Duration> {
    let value = value.trim();
    let split = value.find(|c: char| !(c.is_ascii_digit() || c == '.'))?;
    let (number, unit) = value.split_at(split);
    let number: f64 = number.parse().ok()?;

    let seconds = match unit {
        "ms" => number / 1000.0,
        "s" => number,
        "m" => number * 60.0,
        "h" => number * 3600.0,
        _ => return None,
    };

    Duration::try_from_secs_f64(seconds).ok()
}

/// Parses a listen address, accepting the short `:port` form for all interfaces.
pub fn parse_listen(value: &str) -> Option<SocketAddr> {
    let value = value.trim();
    if let Some(port) = value.strip_prefix(':') {
        return format!("0.0.0.0:{}", port).parse().ok();
    }
    value.parse().ok()
}

/// Rewrites single-dash long flags such as `-dns-servers=...` to their
/// double-dash form. Other arguments are passed through.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .map(|arg| match arg.strip_prefix('-') {
            Some(rest) if !rest.starts_with('-') => {
                let name = rest.split_once('=').map_or(rest, |(name, _)| name);
                if LONG_FLAGS.contains(&name) {
                    format!("-{}", arg)
                } else {
                    arg
                }
            }
            _ => arg,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_duration_units() {
        assert_eq!(parse_duration("500ms"), Some(Duration::from_millis(500)));
        assert_eq!(parse_duration("5s"), Some(Duration::from_secs(5)));
        assert_eq!(parse_duration(" 2m "), Some(Duration::from_secs(120)));
        assert_eq!(parse_duration("1h"), Some(Duration::from_secs(3600)));
        assert_eq!(parse_duration("1.5s"), Some(Duration::from_millis(1500)));
    }

    #[test]
    fn rejects_malformed_durations() {
        assert_eq!(parse_duration("5"), None);
        assert_eq!(parse_duration("s"), None);
        assert_eq!(parse_duration("5d"), None);
        assert_eq!(parse_duration("five seconds"), None);
        assert_eq!(parse_duration(""), None);
    }

    #[test]
    fn parses_listen_forms() {
        assert_eq!(
            parse_listen(":9090"),
            Some("0.0.0.0:9090".parse().unwrap())
        );
        assert_eq!(
            parse_listen("127.0.0.1:8080"),
            Some("127.0.0.1:8080".parse().unwrap())
        );
        assert_eq!(parse_listen("[::1]:9090"), Some("[::1]:9090".parse().unwrap()));
        assert_eq!(parse_listen("localhost"), None);
        assert_eq!(parse_listen(":http"), None);
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn normalizes_single_dash_long_flags() {
        assert_eq!(
            normalize_args(args(&[
                "hostlookuper",
                "-hosts=example.com",
                "-dns-servers",
                "tcp://9.9.9.9",
                "--interval=1s",
                "-debug",
            ])),
            args(&[
                "hostlookuper",
                "--hosts=example.com",
                "--dns-servers",
                "tcp://9.9.9.9",
                "--interval=1s",
                "--debug",
            ])
        );
    }

    #[test]
    fn leaves_unknown_and_short_arguments_alone() {
        assert_eq!(
            normalize_args(args(&["hostlookuper", "-h", "-x=1", "-", "value"])),
            args(&["hostlookuper", "-h", "-x=1", "-", "value"])
        );
    }
}
