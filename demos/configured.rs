/// Custom separators and the environment source
use pathinfo::{Config, ConfigError, EnvPathInfo, PathInfo};

fn main() -> Result<(), ConfigError> {
    let params = PathInfo::from_options(
        ";lang=en;q=path+info;",
        [("PairSeparator", ";"), ("KeyValueSeparator", "=")],
    )?;
    println!("lang: {:?}", params.get("lang")); // Some("en")
    println!("q: {:?}", params.get("q")); // Some("path info")

    // Unknown options are rejected
    match PathInfo::from_options("", [("separator", "/")]) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(e) => println!("error: {e}"), // error: Unknown option: separator
    }

    // Under CGI the server exposes the extra path in PATH_INFO
    let from_env = PathInfo::from_source(&EnvPathInfo::new(), Config::default());
    println!("from PATH_INFO: {:?}", from_env.names());
    Ok(())
}
