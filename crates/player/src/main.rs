//! Chaos Hub player - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use anyhow::Context;
#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chaoshub_player::infrastructure::{platform::create_platform, PlayerConfig};
use chaoshub_player::ui::APP_TITLE;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    let dotenv = load_dotenv();

    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chaoshub_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = dotenv {
            tracing::warn!("Ignoring env file: {:#}", e);
        }
    }

    tracing::info!("Starting Chaos Hub");

    let config = PlayerConfig::from_env();
    tracing::debug!(?config, "Player configuration");

    let platform = create_platform(&config);
    platform.register_offline_cache(&config.service_worker_url);
    platform.set_page_title(APP_TITLE);

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let window = dioxus_desktop::WindowBuilder::new().with_title(APP_TITLE);
        let cfg = dioxus_desktop::Config::new().with_window(window);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(config)
        .launch(chaoshub_player::app);
}

/// Load `.env.local` then `.env` from the working directory.
///
/// Values already present in the environment win over both files.
#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() -> anyhow::Result<()> {
    for filename in [".env.local", ".env"] {
        let path = std::path::Path::new(filename);
        if path.exists() {
            dotenvy::from_path(path).with_context(|| format!("loading {filename}"))?;
        }
    }
    Ok(())
}
