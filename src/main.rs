use std::process;

use quatrot::config::{Config, RotationConfig};
use quatrot::error::QuatResult;
use quatrot::{rotate, rotate_normalized, Vec3};

fn main() {
    env_logger::init();

    let cfg = match Config::new(std::env::args().skip(1).collect()) {
        Ok(cfg) => cfg,
        Err(err) => {
            log::error!("{err}");
            process::exit(1);
        }
    };
    log::info!("{cfg}");

    for rot in cfg.rotations.iter() {
        match run(rot, cfg.normalize) {
            Ok(v) => println!("{v}"),
            Err(err) => {
                log::error!("{err}");
                process::exit(1);
            }
        }
    }
}

fn run(rot: &RotationConfig, normalize: bool) -> QuatResult<Vec3> {
    if normalize {
        rotate_normalized(rot.pos, rot.axis, rot.theta)
    }
    else {
        Ok(rotate(rot.pos, rot.axis, rot.theta))
    }
}
