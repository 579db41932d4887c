use minijinja::Environment;
use std::sync::OnceLock;

pub const MAINTENANCE_TEMPLATE: &str = "maintenance.html";

/// Shared template environment. A template that fails to parse is reported on
/// every call instead of surfacing later as a missing template.
pub fn template_env() -> Result<&'static Environment<'static>, String> {
    static ENV: OnceLock<Result<Environment<'static>, String>> = OnceLock::new();
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| minijinja::AutoEscape::Html);
        env.add_template(
            MAINTENANCE_TEMPLATE,
            include_str!("../../templates/maintenance.html"),
        )
        .map_err(|err| format!("failed to load {MAINTENANCE_TEMPLATE}: {err}"))?;
        Ok(env)
    })
    .as_ref()
    .map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_template_loads() {
        let env = template_env().expect("template env");
        assert!(env.get_template(MAINTENANCE_TEMPLATE).is_ok());
    }
}
