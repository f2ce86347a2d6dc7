pub mod args;
pub mod io;
pub mod geo_3d;
pub mod report;
mod crate_errors;

pub use crate_errors::{
    PlanarError,
    PlanarResult,
    err_str,
};
pub use geo_3d::{
    GeoVector,
    Plane,
};

/// Load the planes named in a config file.
/// An empty plane list is an error.
fn load_plane_set(input_path: &str) -> PlanarResult<report::PlaneSet> {
    log::info!("Loading plane config file: {}...", input_path);
    let cfg = report::PlaneSetCfg::from_cfg_file(input_path)?;
    if cfg.planes.is_empty() {
        return err_str(&format!("Config file {} lists no planes", input_path));
    }
    Ok(report::PlaneSet::from_cfg(&cfg)?)
}

/// Compare every pair of planes in the config file.
/// Returns the rendered report.
pub fn compare(compare_args: &args::CompareArgs) -> PlanarResult<String> {
    let plane_set = load_plane_set(&compare_args.input_path)?;
    let report = report::build_report(&plane_set);
    Ok(report.render(&compare_args.format)?)
}

/// List the equation of every plane in the config file, one per line.
pub fn show(show_args: &args::ShowArgs) -> PlanarResult<String> {
    let plane_set = load_plane_set(&show_args.input_path)?;
    let lines = plane_set.planes.iter()
        .map(|named| format!("{}: {}", named.name, named.plane))
        .collect::<Vec<_>>();
    Ok(lines.join("\n"))
}

/// Display an example plane config file.
pub fn example_config(example_args: &args::ExampleArgs) -> PlanarResult<String> {
    if example_args.format == args::Format::Text {
        return args::err_str("Example config is available as yaml, json or toml")
            .map_err(PlanarError::from);
    }
    let cfg = report::PlaneSetCfg::example();
    let example = io::to_format_string(&cfg, &example_args.format)
        .map_err(args::ArgError::from)?;
    Ok(example)
}

/// Run the subcommand parsed from the command line.
/// Returns the text to print.
pub fn run(cli: &args::PlanarCli) -> PlanarResult<String> {
    match &cli.sub_command {
        args::RunCommand::Compare(compare_args) => compare(compare_args),
        args::RunCommand::Show(show_args) => show(show_args),
        args::RunCommand::Example(example_args) => example_config(example_args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_rejects_text() {
        let err = example_config(&args::ExampleArgs{format: args::Format::Text}).unwrap_err();
        assert!(matches!(err, PlanarError::ArgError(_)));
    }

    #[test]
    fn missing_file_is_reported() {
        let compare_args = args::CompareArgs{
            input_path: "does/not/exist.yaml".to_string(),
            format: args::Format::Text,
        };
        let err = compare(&compare_args).unwrap_err();
        assert!(matches!(err, PlanarError::ReportError(report::ReportError::IoError(_))));
    }
}
