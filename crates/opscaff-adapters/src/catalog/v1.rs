//! v1 project layout: dep-managed, `cmd/manager` entrypoint, StatefulSet manager.

use opscaff_core::domain::Template;

use super::{manifest, scaffold_once};

pub fn catalog() -> Vec<Box<dyn Template>> {
    vec![
        manifest(
            "config/rbac/kustomization.yaml",
            include_str!("../../templates/v1/config/rbac/kustomization.yaml"),
        ),
        manifest(
            "config/default/manager_image_patch.yaml",
            include_str!("../../templates/v1/config/default/manager_image_patch.yaml"),
        ),
        manifest(
            "config/default/manager_prometheus_metrics_patch.yaml",
            include_str!("../../templates/v1/config/default/manager_prometheus_metrics_patch.yaml"),
        ),
        manifest(
            "config/default/manager_auth_proxy_patch.yaml",
            include_str!("../../templates/v1/config/default/manager_auth_proxy_patch.yaml"),
        ),
        manifest(
            "config/rbac/auth_proxy_service.yaml",
            include_str!("../../templates/v1/config/rbac/auth_proxy_service.yaml"),
        ),
        manifest(
            "config/manager/manager.yaml",
            include_str!("../../templates/v1/config/manager/manager.yaml"),
        ),
        scaffold_once("Makefile", include_str!("../../templates/v1/Makefile")),
        scaffold_once("Gopkg.toml", include_str!("../../templates/v1/Gopkg.toml")),
        scaffold_once("Dockerfile", include_str!("../../templates/v1/Dockerfile")),
        manifest(
            "config/default/kustomization.yaml",
            include_str!("../../templates/v1/config/default/kustomization.yaml"),
        ),
        manifest(
            "config/manager/kustomization.yaml",
            include_str!("../../templates/v1/config/manager/kustomization.yaml"),
        ),
        scaffold_once("pkg/apis/apis.go", include_str!("../../templates/v1/pkg/apis/apis.go")),
        scaffold_once(
            "pkg/controller/controller.go",
            include_str!("../../templates/v1/pkg/controller/controller.go"),
        ),
        scaffold_once(
            "pkg/webhook/webhook.go",
            include_str!("../../templates/v1/pkg/webhook/webhook.go"),
        ),
        scaffold_once("cmd/manager/main.go", include_str!("../../templates/v1/cmd/manager/main.go")),
    ]
}
