use haggis_scenes::{RegistryConfig, SceneApp};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RegistryConfig::from_env();
    log::info!("Loading assets from {}", config.base_url);

    let mut frames: u64 = 0;
    SceneApp::new(move |_window| haggis_scenes::headless(config))?
        .on_frame(move |registry| {
            frames += 1;
            if frames % 600 == 0 {
                let light = registry.active_light_index();
                let position = registry.active_entry().lights.get(light).map(|l| l.position);
                log::info!(
                    "frame {}: scene {} ({}), light {} at {:?}",
                    frames,
                    registry.active_scene_index(),
                    registry.shading_algorithm(),
                    light,
                    position
                );
            }
        })
        .run()
}
