use anyhow::{anyhow, Context};
use bucketlist::{MapScreen, MapScreenView, ScreenConfig};
use std::path::Path;

/// Environment variable naming an optional JSON config file
const CONFIG_ENV: &str = "BUCKETLIST_CONFIG";

/// Standalone BucketList window
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => load_config(Path::new(&path))?,
        None => ScreenConfig::default(),
    };
    let screen = MapScreen::new(config).context("invalid screen configuration")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([480.0, 520.0])
            .with_title("BucketList"),
        ..Default::default()
    };

    eframe::run_native(
        "bucketlist",
        options,
        Box::new(|cc| Box::new(BucketListApp::new(cc, screen))),
    )
    .map_err(|e| anyhow!("failed to start the window: {e}"))
}

fn load_config(path: &Path) -> anyhow::Result<ScreenConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config = ScreenConfig::from_json(&json)
        .with_context(|| format!("parsing {}", path.display()))?;
    log::info!("loaded screen config from {}", path.display());
    Ok(config)
}

struct BucketListApp {
    view: MapScreenView,
}

impl BucketListApp {
    fn new(_cc: &eframe::CreationContext<'_>, screen: MapScreen) -> Self {
        Self {
            view: MapScreenView::new(screen),
        }
    }
}

impl eframe::App for BucketListApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.view.show(ctx);
    }
}
