use super::*;


fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

fn command(args: &[&str]) -> CliCommand {
    parse(args).command
}

#[test]
fn cli_parse_slash() {
    match command(&["zenseo", "slash", "/events?x=1"]) {
        CliCommand::Slash { path } => assert_eq!(path, "/events?x=1"),
        _ => panic!("expected Slash"),
    }
}

#[test]
fn cli_parse_alternate() {
    match command(&["zenseo", "alternate", "/pt/sobre", "--routes"]) {
        CliCommand::Alternate { path, routes } => {
            assert_eq!(path, "/pt/sobre");
            assert!(routes);
        }
        _ => panic!("expected Alternate"),
    }
}

#[test]
fn cli_parse_canonical_default_locale() {
    match command(&["zenseo", "canonical", "/events"]) {
        CliCommand::Canonical { path, locale } => {
            assert_eq!(path, "/events");
            assert_eq!(locale, Locale::En);
        }
        _ => panic!("expected Canonical"),
    }
}

#[test]
fn cli_parse_canonical_pt_locale() {
    match command(&["zenseo", "canonical", "/events", "--locale", "pt-BR"]) {
        CliCommand::Canonical { locale, .. } => assert_eq!(locale, Locale::PtBr),
        _ => panic!("expected Canonical"),
    }
}

#[test]
fn cli_rejects_unknown_locale() {
    assert!(Cli::try_parse_from(["zenseo", "canonical", "/", "--locale", "de"]).is_err());
}

#[test]
fn cli_parse_hreflang_flags() {
    match command(&["zenseo", "hreflang", "/about", "--prefix-only", "--html"]) {
        CliCommand::Hreflang {
            path,
            prefix_only,
            html,
        } => {
            assert_eq!(path, "/about");
            assert!(prefix_only);
            assert!(html);
        }
        _ => panic!("expected Hreflang"),
    }
}

#[test]
fn cli_parse_sitemap_defaults() {
    match command(&["zenseo", "sitemap"]) {
        CliCommand::Sitemap {
            out,
            routes,
            dry_run,
        } => {
            assert_eq!(out, PathBuf::from("public"));
            assert!(routes.is_none());
            assert!(!dry_run);
        }
        _ => panic!("expected Sitemap"),
    }
}

#[test]
fn cli_parse_sitemap_with_global_config() {
    let cli = parse(&[
        "zenseo",
        "sitemap",
        "--out",
        "dist",
        "--routes",
        "routes.json",
        "--config",
        "site.toml",
    ]);
    assert_eq!(cli.config, Some(PathBuf::from("site.toml")));
    match cli.command {
        CliCommand::Sitemap { out, routes, .. } => {
            assert_eq!(out, PathBuf::from("dist"));
            assert_eq!(routes, Some(PathBuf::from("routes.json")));
        }
        _ => panic!("expected Sitemap"),
    }
}

#[test]
fn cli_parse_verbosity() {
    assert_eq!(parse(&["zenseo", "slash", "/a"]).verbose, 0);
    assert_eq!(parse(&["zenseo", "-v", "slash", "/a"]).verbose, 1);
    assert_eq!(parse(&["zenseo", "routes", "-vv"]).verbose, 2);
}

#[test]
fn cli_parse_routes() {
    match command(&["zenseo", "routes", "--prerender-only"]) {
        CliCommand::Routes {
            prerender_only,
            routes,
        } => {
            assert!(prerender_only);
            assert!(routes.is_none());
        }
        _ => panic!("expected Routes"),
    }
}

#[test]
fn cli_parse_price() {
    match command(&["zenseo", "price", "49.90", "--locale", "en"]) {
        CliCommand::Price { value, locale } => {
            assert_eq!(value, "49.90");
            assert_eq!(locale, Locale::En);
        }
        _ => panic!("expected Price"),
    }
}

#[test]
fn cli_parse_completions() {
    match command(&["zenseo", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_command_definition_is_valid() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}

#[test]
fn load_config_from_explicit_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.toml");
    std::fs::write(&path, "site_url = \"https://example.com/\"\n").unwrap();
    let cfg = load_config(Some(&path)).unwrap();
    assert_eq!(cfg.site_url, "https://example.com");
}

#[test]
fn load_config_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(Some(&dir.path().join("nope.toml"))).unwrap_err();
    assert!(format!("{err:#}").contains("nope.toml"));
}
