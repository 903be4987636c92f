//! Reusable fixture content for integration tests.

/// A complete, valid ferry.toml pointing at a fictional host
pub const VALID_CONFIG: &str = r#"
[target]
host = "deploy@prod.example.com"
root = "/srv/myapp"

[sync]
source = "."

[ownership]
path = "app"
user = "www-data"
group = "www-data"
mode = "755"

[services]
restart = ["web", "worker", "scheduler"]
"#;

/// Minimal config: just a host, everything else defaulted
pub const MINIMAL_CONFIG: &str = r#"
[target]
host = "prod"
root = "/srv/app"
"#;

/// Config with no [target] section at all
pub const NO_TARGET_CONFIG: &str = r#"
[services]
restart = ["web", "worker", "scheduler"]
"#;

/// Config with a misspelled `exclude` key under [sync]
pub const TYPO_CONFIG: &str = r#"
[target]
host = "prod"
root = "/srv/app"

[sync]
exlude = ["node_modules"]
"#;

/// Seed a project tree matching a small containerized web app, including
/// files that must never be mirrored (.git, .env, bytecode).
pub fn seed_project_tree(env: &super::env::TestEnv) {
    env.write_project_file("app/main.x", "entrypoint\n");
    env.write_project_file("docker-compose.yml", "services: {}\n");
    env.write_project_file(".env", "SECRET=hunter2\n");
    env.write_project_file(".git/config", "[core]\n");
    env.write_project_file("cache.pyc", "\x00bytecode\n");
}
