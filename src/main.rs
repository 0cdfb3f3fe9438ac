// Copyright 2020 TwoCookingMice

use praline::core::light::PointLight;
use praline::core::material::{PhongMaterial, SurfaceClass};
use praline::core::scene::{Scene, SceneObject};
use praline::integrators::path::PathIntegrator;
use praline::integrators::whitted::WhittedIntegrator;
use praline::io::{exr_utils, png_utils};
use praline::math::constants::{Float, Vector3f};
use praline::math::spectrum::RGBSpectrum;
use praline::renderers::simple::{ SimpleRenderer, Renderer };
use praline::sensors::view_plane::ViewPlaneCamera;
use praline::shapes::cuboid::Cuboid;
use praline::shapes::plane::Plane;
use praline::shapes::sphere::Sphere;

use std::env;
use std::sync::Arc;

// Checkered room with two spheres, a box and an emissive ceiling
// panel. The point light feeds the Whitted integrator, the panel feeds
// the path integrator; both see the same geometry.
fn demo_scene(width: usize, height: usize) -> Scene {
    let mut scene = Scene::new();
    scene.set_background_colour(RGBSpectrum::new(0.05, 0.05, 0.08));

    let floor = Arc::new(PhongMaterial::new(
        RGBSpectrum::new(0.25, 0.25, 0.25),
        RGBSpectrum::new(0.7, 0.7, 0.7),
        RGBSpectrum::default(),
        1.0,
    ));
    let left_wall = Arc::new(PhongMaterial::new(
        RGBSpectrum::new(0.3, 0.1, 0.1),
        RGBSpectrum::new(0.6, 0.2, 0.2),
        RGBSpectrum::default(),
        1.0,
    ));
    let right_wall = Arc::new(PhongMaterial::new(
        RGBSpectrum::new(0.1, 0.1, 0.3),
        RGBSpectrum::new(0.2, 0.2, 0.6),
        RGBSpectrum::default(),
        1.0,
    ));
    let neutral_wall = Arc::new(PhongMaterial::new(
        RGBSpectrum::new(0.25, 0.25, 0.25),
        RGBSpectrum::new(0.6, 0.6, 0.6),
        RGBSpectrum::default(),
        1.0,
    ));

    let walls: [(Vector3f, Vector3f, Arc<PhongMaterial>); 6] = [
        (Vector3f::new(0.0, 0.0, 0.0), Vector3f::new(0.0, 1.0, 0.0), floor),
        (Vector3f::new(0.0, 6.0, 0.0), Vector3f::new(0.0, -1.0, 0.0), neutral_wall.clone()),
        (Vector3f::new(0.0, 0.0, -5.0), Vector3f::new(0.0, 0.0, 1.0), neutral_wall.clone()),
        (Vector3f::new(0.0, 0.0, 10.0), Vector3f::new(0.0, 0.0, -1.0), neutral_wall),
        (Vector3f::new(-4.0, 0.0, 0.0), Vector3f::new(1.0, 0.0, 0.0), left_wall),
        (Vector3f::new(4.0, 0.0, 0.0), Vector3f::new(-1.0, 0.0, 0.0), right_wall),
    ];
    for (point, normal, material) in walls.iter() {
        scene.add_object(
            SceneObject::new(
                Arc::new(Plane::new(*point, *normal, None)),
                material.clone(),
            )
            .with_surface_class(SurfaceClass::Patterned),
        );
    }

    let mirror_sphere = Arc::new(PhongMaterial::new(
        RGBSpectrum::new(0.05, 0.05, 0.05),
        RGBSpectrum::new(0.25, 0.25, 0.3),
        RGBSpectrum::new(0.9, 0.9, 0.9),
        100.0,
    ));
    scene.add_object(
        SceneObject::new(
            Arc::new(Sphere::new(Vector3f::new(-1.8, 1.2, -2.0), 1.2, None)),
            mirror_sphere,
        )
        .with_surface_class(SurfaceClass::Reflective),
    );

    let red_sphere = Arc::new(PhongMaterial::new(
        RGBSpectrum::new(0.05, 0.02, 0.02),
        RGBSpectrum::new(0.7, 0.25, 0.2),
        RGBSpectrum::new(0.6, 0.6, 0.6),
        30.0,
    ));
    scene.add_object(
        SceneObject::new(
            Arc::new(Sphere::new(Vector3f::new(1.6, 1.0, -1.0), 1.0, None)),
            red_sphere,
        )
        .with_surface_class(SurfaceClass::Reflective),
    );

    let green_box = Arc::new(PhongMaterial::new(
        RGBSpectrum::new(0.02, 0.05, 0.03),
        RGBSpectrum::new(0.2, 0.6, 0.3),
        RGBSpectrum::new(0.3, 0.3, 0.3),
        10.0,
    ));
    scene.add_object(
        SceneObject::new(
            Arc::new(Cuboid::new(
                Vector3f::new(-0.8, 0.0, -4.5),
                Vector3f::new(1.2, 2.0, -3.0),
                None,
            )),
            green_box,
        )
        .with_surface_class(SurfaceClass::Reflective),
    );

    let ceiling_panel = Arc::new(
        PhongMaterial::new(
            RGBSpectrum::default(),
            RGBSpectrum::default(),
            RGBSpectrum::default(),
            1.0,
        )
        .with_emissive(RGBSpectrum::new(12.0, 12.0, 12.0)),
    );
    scene.add_object(SceneObject::new(
        Arc::new(Cuboid::new(
            Vector3f::new(-1.2, 5.8, -2.2),
            Vector3f::new(1.2, 5.98, 0.2),
            None,
        )),
        ceiling_panel,
    ));

    scene.add_light(PointLight::new(
        Vector3f::new(0.0, 5.5, 2.0),
        RGBSpectrum::new(1.0, 1.0, 1.0),
    ));

    let aspect = (width as Float) / (height as Float);
    scene.add_sensor(Box::new(ViewPlaneCamera::new(
        Vector3f::new(0.0, 3.0, 9.0),
        Vector3f::new(0.0, 2.5, 0.0),
        Vector3f::new(0.0, 1.0, 0.0),
        1.0,
        aspect,
        1.0,
        width,
        height,
    )));

    scene
}

fn main() {
    env::set_var("RUST_LOG", "info");
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <output.(png|exr)> [--integrator whitted|path] [--spp N] [--max-depth N] [--seed N] [--width N] [--height N]", args[0]);
        std::process::exit(1);
    }

    let output_path = &args[1];
    let mut integrator_name = String::from("whitted");
    let mut spp: u32 = 100;
    let mut max_depth: u32 = 5;
    let mut seed: u64 = 0;
    let mut width: usize = 640;
    let mut height: usize = 480;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--integrator" => {
                i += 1;
                if let Some(name) = args.get(i) {
                    integrator_name = name.clone();
                }
            }
            "--spp" => {
                i += 1;
                spp = args.get(i).and_then(|v| v.parse::<u32>().ok()).unwrap_or(spp);
            }
            "--max-depth" => {
                i += 1;
                max_depth = args.get(i).and_then(|v| v.parse::<u32>().ok()).unwrap_or(max_depth);
            }
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|v| v.parse::<u64>().ok()).unwrap_or(seed);
            }
            "--width" => {
                i += 1;
                width = args.get(i).and_then(|v| v.parse::<usize>().ok()).unwrap_or(width);
            }
            "--height" => {
                i += 1;
                height = args.get(i).and_then(|v| v.parse::<usize>().ok()).unwrap_or(height);
            }
            _ => {}
        }
        i += 1;
    }

    let integrator: Box<dyn praline::core::integrator::Integrator> = match integrator_name.as_str() {
        "whitted" => Box::new(WhittedIntegrator::new(max_depth)),
        "path" => Box::new(PathIntegrator::new(max_depth, spp)),
        other => {
            eprintln!("Unknown integrator '{}', expected 'whitted' or 'path'.", other);
            std::process::exit(1);
        }
    };

    log::info!("praline: {} integrator, {}x{}, depth {}", integrator_name, width, height, max_depth);

    let mut scene = demo_scene(width, height);
    let renderer: SimpleRenderer = SimpleRenderer::new(integrator, 0, seed);
    let image = renderer.render(&mut scene);

    if output_path.ends_with(".exr") {
        exr_utils::write_exr_to_file(&image.raw_copy(), image.width(), image.height(), output_path);
    } else if output_path.ends_with(".png") {
        png_utils::write_png_to_file(&image.raw_copy(), image.width(), image.height(), output_path);
    } else {
        log::error!("Unsupported output extension in '{}', expected .png or .exr.", output_path);
        std::process::exit(1);
    }
}
