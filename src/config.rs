use std::{
    fmt,
    f64::consts::PI,
};

use crate::{
    error::{QuatError, QuatResult},
    vector::Vec3,
};


/// Parsing states.
#[derive(Clone, Copy)]
enum Parse {
    None,
    Pos,
    Axis,
    Theta,
}
impl Parse {
    fn flag(self) -> Option<&'static str> {
        match self {
            Parse::None  => None,
            Parse::Pos   => Some("-pos"),
            Parse::Axis  => Some("-axis"),
            Parse::Theta => Some("-theta"),
        }
    }

    fn arity(self) -> usize {
        match self {
            Parse::None  => 0,
            Parse::Pos   => 3,
            Parse::Axis  => 3,
            Parse::Theta => 1,
        }
    }
}


/// Demo settings parsed from the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub rotations: Vec<RotationConfig>,
    pub normalize: bool,
}
impl Config {
    /// Create a new Config from the command line arguments, program name
    /// excluded.
    pub fn new(args: Vec<String>) -> QuatResult<Config> {
        let mut parser = Parse::None;
        let mut values = Vec::with_capacity(3);
        let mut custom: Option<RotationConfig> = None;
        let mut normalize = false;

        for arg in args.into_iter() {
            if let Some(flag) = parser.flag() {
                match arg.parse::<f64>() {
                    Ok(v) => values.push(v),
                    Err(_) if arg.starts_with('-') => {
                        return Err(
                            QuatError::MissingValue(flag.to_string())
                        );
                    }
                    Err(_) => {
                        return Err(
                            QuatError::InvalidNumber(flag.to_string(), arg)
                        );
                    }
                }
                if values.len() == parser.arity() {
                    let rot = custom.get_or_insert_with(RotationConfig::default);
                    match parser {
                        Parse::Pos   => rot.pos = Vec3::new(values[0], values[1], values[2]),
                        Parse::Axis  => rot.axis = Vec3::new(values[0], values[1], values[2]),
                        Parse::Theta => rot.theta = values[0],
                        Parse::None  => {},
                    }
                    values.clear();
                    parser = Parse::None;
                }
                continue;
            }
            match arg.as_str() {
                "-pos" => {
                    parser = Parse::Pos;
                }
                "-axis" => {
                    parser = Parse::Axis;
                }
                "-theta" => {
                    parser = Parse::Theta;
                }
                "-normalize" => {
                    normalize = true;
                }
                _ => {
                    return Err(
                        QuatError::UnknownFlag(arg)
                    );
                }
            }
        }
        if let Some(flag) = parser.flag() {
            return Err(
                QuatError::MissingValue(flag.to_string())
            );
        }

        let rotations = match custom {
            Some(rot) => vec![rot],
            None => Self::reference_rotations(),
        };
        Ok(Config { rotations, normalize })
    }

    /// The two rotations the demo runs when no rotation flags are given.
    /// The second one uses a non-unit axis on purpose.
    pub fn reference_rotations() -> Vec<RotationConfig> {
        vec![
            RotationConfig::default(),
            RotationConfig {
                axis: Vec3::new(0.0, 10.0, 0.0),
                ..Default::default()
            },
        ]
    }
}
impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "
            \rRotations (normalize axis: {})
            \r=============================================================",
            self.normalize,
        )?;
        for (i, rot) in self.rotations.iter().enumerate() {
            write!(f, "
                \rRotation {i}:
                \r{rot}",
            )?;
        }
        writeln!(f)
    }
}
impl Default for Config {
    fn default() -> Self {
        Self {
            rotations: Self::reference_rotations(),
            normalize: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationConfig {
    pub pos: Vec3,
    pub axis: Vec3,
    pub theta: f64,
}
impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            pos: Vec3::new(1.0, 1.0, 1.0),
            axis: Vec3::new(0.0, 1.0, 0.0),
            theta: PI / 3.0,
        }
    }
}
impl fmt::Display for RotationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "
            \rPosition: {}
            \rAxis: {}
            \rTheta: {}",
            self.pos,
            self.axis,
            self.theta,
        )
    }
}


#[cfg(test)]
fn args(s: &str) -> Vec<String> {
    s.split_whitespace().map(String::from).collect()
}

#[test]
fn no_args_gives_reference_rotations() {
    let cfg = Config::new(Vec::new()).unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.rotations.len(), 2);
    assert!(cfg.rotations[1].axis == Vec3::new(0.0, 10.0, 0.0));
}

#[test]
fn custom_rotation() {
    let cfg = Config::new(args("-pos 1 -2.5 3 -axis 0 0 1 -theta 0.5 -normalize")).unwrap();
    assert!(cfg.normalize);
    assert_eq!(cfg.rotations, vec![RotationConfig {
        pos: Vec3::new(1.0, -2.5, 3.0),
        axis: Vec3::new(0.0, 0.0, 1.0),
        theta: 0.5,
    }]);
}

#[test]
fn partial_rotation_uses_defaults() {
    let cfg = Config::new(args("-theta -1")).unwrap();
    assert_eq!(cfg.rotations, vec![RotationConfig {
        theta: -1.0,
        ..Default::default()
    }]);
}

#[test]
fn missing_values() {
    assert_eq!(Config::new(args("-pos 1 2")), Err(QuatError::MissingValue("-pos".into())));
    assert_eq!(Config::new(args("-axis 1 -theta 2")), Err(QuatError::MissingValue("-axis".into())));
}

#[test]
fn invalid_number() {
    assert_eq!(
        Config::new(args("-theta abc")),
        Err(QuatError::InvalidNumber("-theta".into(), "abc".into()))
    );
}

#[test]
fn unknown_flag() {
    assert_eq!(Config::new(args("-scale 2")), Err(QuatError::UnknownFlag("-scale".into())));
}
