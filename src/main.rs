use anyhow::Result;
use clap::Parser;

use tooldb_config::app::config::manager::SettingsManager;
use tooldb_config::app::config::validator::SettingsValidator;
use tooldb_config::app::logging::init_logging;
use tooldb_config::cli::{Args, Commands};
use tooldb_config::core::format::FieldFormatter;

fn main() -> Result<()> {
    // 解析命令行参数
    let args = Args::parse();

    let mut manager = match &args.config {
        Some(path) => SettingsManager::with_path(path),
        None => SettingsManager::new()?,
    };

    match args.command {
        Commands::Init { force } => {
            let config_file =
                manager.paths().config_file();
            if config_file.exists() && !force {
                anyhow::bail!(
                    "配置文件已存在: {}（使用 --force 覆盖）",
                    config_file.display()
                );
            }
            manager.save()?;
            println!(
                "已写入默认配置: {}",
                manager.paths().config_file().display()
            );
        }

        Commands::Validate => {
            manager.load()?;
            init_logging(&manager.settings().logging)?;

            let report = SettingsValidator::validate(
                manager.settings(),
            );

            for warning in &report.warnings {
                println!("warning: {warning}");
            }
            for error in &report.errors {
                eprintln!("error: {error}");
            }
            println!(
                "{} error(s), {} warning(s)",
                report.errors.len(),
                report.warnings.len()
            );

            if !report.is_ok() {
                std::process::exit(1);
            }
        }

        Commands::Show => {
            manager.load()?;
            print!("{}", manager.to_yaml()?);
        }

        Commands::Paths => {
            manager.load()?;
            let paths = manager.paths();
            for (key, value) in
                manager.settings().file_paths.entries()
            {
                println!(
                    "{key}: {}",
                    paths.resolve(value)?.display()
                );
            }
        }

        Commands::Format { field, kind, value } => {
            manager.load()?;
            let settings = manager.settings();
            let formatter = FieldFormatter::new(
                &settings.tool_settings,
            );

            let formatted = match (field, kind) {
                (Some(field), None) => formatter
                    .format_named(&field, &value)?,
                (None, Some(kind)) => formatter
                    .format_value(kind.into(), &value)?,
                _ => anyhow::bail!(
                    "--field 和 --kind 必须且只能指定其一"
                ),
            };
            println!("{formatted}");
        }
    }

    Ok(())
}
