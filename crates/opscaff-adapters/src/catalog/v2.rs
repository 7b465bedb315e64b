//! v2 project layout: Go modules, root `main.go`, Deployment manager with
//! optional webhook, cert-manager and prometheus overlays.

use opscaff_core::domain::Template;

use super::{manifest, scaffold_once};

pub fn catalog() -> Vec<Box<dyn Template>> {
    vec![
        manifest(
            "config/default/manager_auth_proxy_patch.yaml",
            include_str!("../../templates/v2/config/default/manager_auth_proxy_patch.yaml"),
        ),
        manifest(
            "config/rbac/auth_proxy_service.yaml",
            include_str!("../../templates/v2/config/rbac/auth_proxy_service.yaml"),
        ),
        manifest(
            "config/rbac/auth_proxy_client_clusterrole.yaml",
            include_str!("../../templates/v2/config/rbac/auth_proxy_client_clusterrole.yaml"),
        ),
        manifest(
            "config/manager/manager.yaml",
            include_str!("../../templates/v2/config/manager/manager.yaml"),
        ),
        scaffold_once("main.go", include_str!("../../templates/v2/main.go")),
        scaffold_once("go.mod", include_str!("../../templates/v2/go.mod")),
        scaffold_once("Makefile", include_str!("../../templates/v2/Makefile")),
        scaffold_once("Dockerfile", include_str!("../../templates/v2/Dockerfile")),
        manifest(
            "config/default/kustomization.yaml",
            include_str!("../../templates/v2/config/default/kustomization.yaml"),
        ),
        manifest(
            "config/default/manager_webhook_patch.yaml",
            include_str!("../../templates/v2/config/default/manager_webhook_patch.yaml"),
        ),
        manifest(
            "config/rbac/role_binding.yaml",
            include_str!("../../templates/v2/config/rbac/role_binding.yaml"),
        ),
        manifest(
            "config/rbac/leader_election_role.yaml",
            include_str!("../../templates/v2/config/rbac/leader_election_role.yaml"),
        ),
        manifest(
            "config/rbac/leader_election_role_binding.yaml",
            include_str!("../../templates/v2/config/rbac/leader_election_role_binding.yaml"),
        ),
        manifest(
            "config/rbac/kustomization.yaml",
            include_str!("../../templates/v2/config/rbac/kustomization.yaml"),
        ),
        manifest(
            "config/manager/kustomization.yaml",
            include_str!("../../templates/v2/config/manager/kustomization.yaml"),
        ),
        manifest(
            "config/webhook/kustomization.yaml",
            include_str!("../../templates/v2/config/webhook/kustomization.yaml"),
        ),
        manifest(
            "config/webhook/kustomizeconfig.yaml",
            include_str!("../../templates/v2/config/webhook/kustomizeconfig.yaml"),
        ),
        manifest(
            "config/webhook/service.yaml",
            include_str!("../../templates/v2/config/webhook/service.yaml"),
        ),
        manifest(
            "config/default/webhookcainjection_patch.yaml",
            include_str!("../../templates/v2/config/default/webhookcainjection_patch.yaml"),
        ),
        manifest(
            "config/prometheus/kustomization.yaml",
            include_str!("../../templates/v2/config/prometheus/kustomization.yaml"),
        ),
        manifest(
            "config/prometheus/monitor.yaml",
            include_str!("../../templates/v2/config/prometheus/monitor.yaml"),
        ),
        manifest(
            "config/certmanager/certificate.yaml",
            include_str!("../../templates/v2/config/certmanager/certificate.yaml"),
        ),
        manifest(
            "config/certmanager/kustomization.yaml",
            include_str!("../../templates/v2/config/certmanager/kustomization.yaml"),
        ),
        manifest(
            "config/certmanager/kustomizeconfig.yaml",
            include_str!("../../templates/v2/config/certmanager/kustomizeconfig.yaml"),
        ),
    ]
}
