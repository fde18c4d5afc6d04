use crate::cli::{ScanCmd, ScanTarget};
use crate::domain::models::{
    BehaviorFlags, ConfigError, NamespaceFilter, OutputOptions, PolicyKind, ScanConfig,
};
use crate::services::{audit, catalog, inputs, output, resolver, selector};

pub fn handle_scan(cmd: &ScanCmd) -> anyhow::Result<()> {
    let (kind, names, sources): (PolicyKind, Option<&str>, &[String]) = match &cmd.target {
        None => (PolicyKind::Framework, None, &[]),
        Some(ScanTarget::Framework { names, sources }) => {
            (PolicyKind::Framework, Some(names.as_str()), sources.as_slice())
        }
        Some(ScanTarget::Control { names, sources }) => {
            (PolicyKind::Control, Some(names.as_str()), sources.as_slice())
        }
    };

    let resolved = resolver::resolve_targets(names, kind, catalog::NATIVE_FRAMEWORKS);
    let filter =
        NamespaceFilter::from_flags(&cmd.opts.include_namespaces, &cmd.opts.exclude_namespaces)
            .unwrap_or_else(|err| fatal(err));

    let mut cfg = ScanConfig {
        policies: resolved.identifiers,
        scan_all: resolved.scan_all,
        namespace_filter: filter,
        input_patterns: Vec::new(),
        output: OutputOptions {
            format: cmd.opts.format,
            file: cmd.opts.output.clone(),
        },
        behavior: BehaviorFlags {
            submit: cmd.opts.submit,
            keep_local: cmd.opts.keep_local,
            silent: cmd.opts.silent,
            fail_threshold: cmd.opts.fail_threshold,
            use_from: cmd.opts.use_from.clone(),
            use_default: cmd.opts.use_default,
            exceptions: cmd.opts.exceptions.clone(),
            controls_config: cmd.opts.controls_config.clone(),
        },
    };

    if let Err(err) = cfg.validate() {
        fatal(err);
    }
    if !sources.is_empty() {
        inputs::set_input_patterns(&mut cfg, sources)?;
    }

    if !cfg.behavior.silent {
        eprintln!("resolved {} scan targets", cfg.policies.len());
        // Preview the filter as the fetch layer will apply it when listing
        // the namespace objects themselves.
        let preview = selector::selector_for(&cfg.namespace_filter)
            .namespaces_selector("", "namespaces");
        if !preview.is_empty() {
            eprintln!("namespace filter: {preview}");
        }
    }
    audit::audit(
        "scan",
        serde_json::json!({
            "targets": cfg.policies.len(),
            "scanAll": cfg.scan_all,
        }),
    );

    output::emit_one(cfg.output.format, cfg.output.file.as_deref(), &cfg, |c| {
        c.policies
            .iter()
            .map(|p| format!("{}\t{}", p.kind, p.name))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

// Conflicting flags end the process immediately; exit code 2, like the
// argument-parser rejections.
fn fatal(err: ConfigError) -> ! {
    eprintln!("{err}");
    std::process::exit(2);
}
