use tracing_subscriber::EnvFilter;

/// Sets up the stderr subscriber for the `bazi` target: warn by default,
/// `-v` info, `-vv` debug, anything more trace. `RUST_LOG` wins when set.
pub fn init(verbosity: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("bazi={level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        for (verbosity, std) in [
            (0, "bazi=warn"),
            (1, "bazi=info"),
            (2, "bazi=debug"),
            (3, "bazi=trace"),
            (9, "bazi=trace"),
        ] {
            assert_eq!(std, directive(verbosity));
            EnvFilter::try_new(std).unwrap();
        }
    }
}
