use anyhow::{Context, Result};
use std::path::PathBuf;
use trackshare_core::AppConfig;
use trackshare_ui_egui::{theme, TrackShareApp};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,trackshare=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting TrackShare");

    let config = load_config()?;
    tracing::info!(
        "Preferred app: {}, search timeout: {}s",
        config.preferred_app,
        config.search_timeout_secs
    );

    // The share pipeline is async; the UI blocks on this runtime's
    // handle for the duration of a share action.
    let runtime = tokio::runtime::Runtime::new()?;

    let app = TrackShareApp::new(config, runtime.handle().clone())?;

    tracing::info!("Launching UI...");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([320.0, 200.0])
            .with_resizable(false)
            .with_always_on_top()
            .with_title("TrackShare"),
        ..Default::default()
    };

    eframe::run_native(
        "TrackShare",
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(theme::dark_visuals());
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}

/// Load configuration from the platform config dir; defaults when the
/// file is absent.
fn load_config() -> Result<AppConfig> {
    let path = config_path()?;

    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = toml::from_str(&text)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Get the config file path (platform-specific)
fn config_path() -> Result<PathBuf> {
    let config_dir = if cfg!(target_os = "windows") {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Failed to get config directory"))?
            .join("TrackShare")
    } else if cfg!(target_os = "macos") {
        dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Failed to get home directory"))?
            .join("Library")
            .join("Application Support")
            .join("TrackShare")
    } else {
        // Linux
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Failed to get config directory"))?
            .join("trackshare")
    };

    Ok(config_dir.join("trackshare.toml"))
}
