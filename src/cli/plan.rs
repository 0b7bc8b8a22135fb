//! Plan command implementation

use std::path::PathBuf;
use std::process::ExitCode;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{
    load_config, load_options_file, merge_cli_overrides, CliOverrides, ConfettiConfig,
    OutputFormat,
};
use crate::explosion::{Explosion, ExplosionPlan};
use crate::models::{Anchor, ParticlesShape};
use crate::palettes;
use crate::validate;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Arguments of the plan command
#[derive(Debug, Default, Clone)]
pub struct PlanArgs {
    pub options: Option<PathBuf>,
    pub count: Option<i64>,
    pub duration: Option<i64>,
    pub force: Option<f64>,
    pub size: Option<f64>,
    pub stage_width: Option<f64>,
    pub stage_height: Option<f64>,
    pub shape: Option<ParticlesShape>,
    pub palette: Option<String>,
    pub anchor: Option<Anchor>,
    pub seed: Option<u64>,
    pub format: Option<OutputFormat>,
    pub pretty: bool,
    pub parallel: bool,
    pub config: Option<PathBuf>,
}

impl PlanArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            particle_count: self.count,
            duration: self.duration,
            force: self.force,
            particle_size: self.size,
            stage_width: self.stage_width,
            stage_height: self.stage_height,
            particles_shape: self.shape,
            palette: self.palette.clone(),
            format: self.format,
            pretty: self.pretty.then_some(true),
        }
    }
}

/// Execute the plan command
pub fn run_plan(args: PlanArgs) -> ExitCode {
    if let Some(ref name) = args.palette {
        if palettes::get_builtin(name).is_none() {
            eprintln!("Error: Unknown palette '{}'", name);
            eprintln!();
            eprintln!("Available palettes:");
            for builtin_name in palettes::list_builtins() {
                eprintln!("  @{}", builtin_name);
            }
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    }

    let mut config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Option file sits between confetti.toml and command-line flags
    if let Some(ref path) = args.options {
        match load_options_file(path) {
            Ok(file_options) => {
                config.explosion.options = config.explosion.options.clone().merged(&file_options);
            }
            Err(e) => {
                eprintln!("Error: Cannot load '{}': {}", path.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    }

    merge_cli_overrides(&mut config, &args.overrides());

    let mut explosion = Explosion::new(config.explosion_options());
    if let Some(anchor) = args.anchor {
        explosion = explosion.at(anchor);
    }

    // Errors go to stderr here; planning only reaches the log for warnings
    let issues = explosion.issues();
    if validate::has_errors(&issues) {
        for issue in issues.iter().filter(|i| i.is_error()) {
            eprintln!("  {}", issue);
        }
        eprintln!("Error: Explosion options are invalid, nothing planned");
        return ExitCode::from(EXIT_ERROR);
    }

    let plan = match args.seed {
        Some(seed) => explosion.plan(&mut StdRng::seed_from_u64(seed)),
        None if args.parallel => explosion.plan_parallel(),
        None => explosion.plan(&mut rand::thread_rng()),
    };

    let Some(plan) = plan else {
        eprintln!("Error: Explosion options are invalid, nothing planned");
        return ExitCode::from(EXIT_ERROR);
    };

    match render(&plan, &config) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: Failed to serialize plan: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn render(plan: &ExplosionPlan, config: &ConfettiConfig) -> Result<String, serde_json::Error> {
    match config.output.format {
        OutputFormat::Css => Ok(render_css(plan)),
        OutputFormat::Json if config.output.pretty || atty::is(atty::Stream::Stdout) => {
            serde_json::to_string_pretty(plan)
        }
        OutputFormat::Json => serde_json::to_string(plan),
    }
}

/// Render a plan as CSS rules: one for the container, one per particle.
pub fn render_css(plan: &ExplosionPlan) -> String {
    let mut out = format!(".confetti-container {{ {} }}\n", plan.container_styles().to_declarations());
    for (i, styles) in plan.particle_styles().iter().enumerate() {
        out.push_str(&format!(
            ".confetti-particle:nth-child({}) {{ {} }}\n",
            i + 1,
            styles.to_declarations()
        ));
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExplosionOptions;

    #[test]
    fn test_render_css() {
        let options = ExplosionOptions { particle_count: Some(2), ..Default::default() };
        let plan = Explosion::new(options)
            .at(Anchor::new(10.0, 20.0))
            .plan(&mut StdRng::seed_from_u64(5))
            .unwrap();
        let css = render_css(&plan);
        let lines: Vec<&str> = css.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            ".confetti-container { --floor-height: 800px; --confetti-x: 10px; --confetti-y: 20px; }"
        );
        assert!(lines[1].starts_with(".confetti-particle:nth-child(1) { --x-landing-point: "));
        assert!(lines[2].contains("--bgcolor: #FF0000;"));
    }

    #[test]
    fn test_overrides_from_args() {
        let args = PlanArgs { count: Some(3), pretty: true, ..Default::default() };
        let overrides = args.overrides();
        assert_eq!(overrides.particle_count, Some(3));
        assert_eq!(overrides.pretty, Some(true));
        assert_eq!(PlanArgs::default().overrides().pretty, None);
    }
}
