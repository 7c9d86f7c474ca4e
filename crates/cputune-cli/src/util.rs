use cputune::{LoadReport, TuneParams, TuningLoader};
use cputune_params::find_profile;

use crate::args::LoadArgs;

/// Apply the tuning file on top of the selected base profile.
pub fn load(args: &LoadArgs) -> anyhow::Result<(TuneParams, LoadReport)> {
    let profile = find_profile(&args.base)?;
    tracing::info!(profile = profile.name, file = %args.file.display(), "loading tuning file");

    let mut params = profile.params();
    let report = TuningLoader::new(args.to_load_options()).load_file(&args.file, &mut params);
    Ok((params, report))
}

/// Print rendered diagnostics to stderr, if there are any.
pub fn print_diagnostics(report: &LoadReport, args: &LoadArgs) {
    if report.diagnostics.reports().is_empty() {
        return;
    }
    eprintln!(
        "{}",
        report
            .diagnostics
            .render(&args.render.to_render_options())
    );
}
