//! Golden tests for the exact remote command lines.
//!
//! These commands run as root against production hosts; any drift in their
//! shape is worth a deliberate snapshot update.

use std::path::PathBuf;

use ferry::domain::ports::Transport;
use ferry::infrastructure::{restart_command, RsyncTransport};
use ferry::{ExclusionSet, OwnershipSpec, RemoteTarget, ServiceSet};

#[test]
fn golden_rsync_command() {
    let transport = RsyncTransport::new(
        PathBuf::from("/home/me/project"),
        RemoteTarget::parse("deploy@prod:/srv/myapp").unwrap(),
        ExclusionSet::standard().unwrap(),
    );
    insta::assert_snapshot!(
        transport.describe(),
        @"rsync -az --delete --exclude=.git --exclude=.env --exclude=__pycache__ --exclude=*.pyc --exclude=venv --exclude=.DS_Store --exclude=*.egg-info -e ssh /home/me/project/ deploy@prod:/srv/myapp"
    );
}

#[test]
fn golden_normalize_command() {
    let ownership = OwnershipSpec::new("www-data", "www-data", "755").unwrap();
    insta::assert_snapshot!(
        ownership.normalize_command("/srv/myapp/app"),
        @"chown -R www-data:www-data '/srv/myapp/app' && chmod -R 755 '/srv/myapp/app'"
    );
}

#[test]
fn golden_restart_command() {
    let services = ServiceSet::new(["web", "worker", "scheduler"]).unwrap();
    insta::assert_snapshot!(
        restart_command("/srv/myapp", None, &services),
        @"cd '/srv/myapp' && docker compose up -d --build web worker scheduler"
    );
}

#[test]
fn golden_restart_command_with_compose_file() {
    let services = ServiceSet::new(["web"]).unwrap();
    insta::assert_snapshot!(
        restart_command("/srv/myapp", Some("docker-compose.prod.yml"), &services),
        @"cd '/srv/myapp' && docker compose -f 'docker-compose.prod.yml' up -d --build web"
    );
}
