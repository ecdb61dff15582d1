use crate::error::SceneError;

/// Where the environment pixels came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnvironmentSource {
    Loaded,
    Fallback,
}

/// Equirectangular RGBA8 (sRGB) image used for reflections and refraction.
#[derive(Clone, Debug)]
pub struct EnvironmentMap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    source: EnvironmentSource,
}

impl EnvironmentMap {
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, SceneError> {
        let expected = width as usize * height as usize * 4;
        if width == 0 || height == 0 || pixels.len() != expected {
            return Err(SceneError::EnvironmentSize {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
            source: EnvironmentSource::Loaded,
        })
    }

    /// Small procedural sky used when the remote image cannot be fetched:
    /// pale blue zenith, bright horizon, warm ground.
    pub fn fallback() -> Self {
        const W: u32 = 64;
        const H: u32 = 32;
        const ZENITH: [f32; 3] = [0.36, 0.56, 0.86];
        const HORIZON: [f32; 3] = [0.93, 0.94, 0.96];
        const GROUND: [f32; 3] = [0.62, 0.52, 0.44];
        let mut pixels = Vec::with_capacity((W * H * 4) as usize);
        for y in 0..H {
            // v = 0 is straight up, 1 straight down
            let v = (y as f32 + 0.5) / H as f32;
            let (from, to, t) = if v < 0.5 {
                (ZENITH, HORIZON, v / 0.5)
            } else {
                (HORIZON, GROUND, ((v - 0.5) / 0.5).sqrt())
            };
            let rgb: [u8; 3] =
                std::array::from_fn(|i| ((from[i] + (to[i] - from[i]) * t) * 255.0).round() as u8);
            for _ in 0..W {
                pixels.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
            }
        }
        Self {
            width: W,
            height: H,
            pixels,
            source: EnvironmentSource::Fallback,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn source(&self) -> EnvironmentSource {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_buffer() {
        let err = EnvironmentMap::from_rgba(2, 2, vec![0; 15]).unwrap_err();
        assert_eq!(
            err,
            SceneError::EnvironmentSize {
                width: 2,
                height: 2,
                expected: 16,
                actual: 15
            }
        );
    }

    #[test]
    fn fallback_is_opaque_and_complete() {
        let env = EnvironmentMap::fallback();
        assert_eq!(env.source(), EnvironmentSource::Fallback);
        assert_eq!(env.pixels().len(), (env.width() * env.height() * 4) as usize);
        assert!(env.pixels().chunks(4).all(|p| p[3] == 255));
    }
}
