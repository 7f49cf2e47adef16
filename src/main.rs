use lumen::camera::Camera;
use lumen::export::write_ppm;
use lumen::objects::HittableObjects;
use lumen::scenes::{
    bouncing::BouncingSpheres, checkered::CheckeredSpheres, cornell::Cornell,
    cornell_smoke::CornellSmoke, earth::Earth, perlin::PerlinSpheres, quads::Quads,
    showcase::Showcase, simple_light::SimpleLight, Scene,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::BufWriter;

const SCENE_SEED: u64 = 2024;

fn build(name: &str) -> Option<(Camera, HittableObjects)> {
    let mut rng = SmallRng::seed_from_u64(SCENE_SEED);
    match name {
        "bouncing" => Some((
            BouncingSpheres::build_camera(),
            BouncingSpheres::build_world(&mut rng),
        )),
        "checkered" => Some((
            CheckeredSpheres::build_camera(),
            CheckeredSpheres::build_world(&mut rng),
        )),
        "earth" => Some((Earth::build_camera(), Earth::build_world(&mut rng))),
        "perlin" => Some((
            PerlinSpheres::build_camera(),
            PerlinSpheres::build_world(&mut rng),
        )),
        "quads" => Some((Quads::build_camera(), Quads::build_world(&mut rng))),
        "light" => Some((
            SimpleLight::build_camera(),
            SimpleLight::build_world(&mut rng),
        )),
        "cornell" => Some((Cornell::build_camera(), Cornell::build_world(&mut rng))),
        "smoke" => Some((
            CornellSmoke::build_camera(),
            CornellSmoke::build_world(&mut rng),
        )),
        "showcase" => Some((Showcase::build_camera(), Showcase::build_world(&mut rng))),
        _ => None,
    }
}

fn save(buffer: &image::RgbImage, path: &str) -> Result<(), String> {
    if path.ends_with(".ppm") {
        let file = File::create(path).map_err(|e| e.to_string())?;
        write_ppm(buffer, &mut BufWriter::new(file)).map_err(|e| e.to_string())
    } else {
        buffer.save(path).map_err(|e| e.to_string())
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let scene = args.get(1).map(String::as_str).unwrap_or("cornell");
    let output = args.get(2).map(String::as_str).unwrap_or("render.png");

    log::info!("Building scene '{}'...", scene);
    let now = std::time::Instant::now();
    let Some((camera, world)) = build(scene) else {
        log::error!(
            "Unknown scene '{}' (expected bouncing, checkered, earth, perlin, quads, \
             light, cornell, smoke, or showcase)",
            scene
        );
        std::process::exit(1);
    };
    let build_elapsed = now.elapsed();

    log::info!(
        "Rendering {}x{}...",
        camera.image_width(),
        camera.image_height()
    );
    let now = std::time::Instant::now();
    let buffer = camera.render(&world);
    let render_elapsed = now.elapsed();

    if let Err(e) = save(&buffer, output) {
        log::error!("Failed to write '{}': {}", output, e);
        std::process::exit(1);
    }

    log::info!(
        "Done. Build time: {:?}. Render time: {:?}. Output: {}",
        build_elapsed,
        render_elapsed,
        output
    );
}
