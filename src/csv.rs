use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::{particles::Particle, statistics::HistogramSample};

/// Write one line per bin: `radius,empirical,theoretical`.
pub fn write_histogram(sample: &HistogramSample, mut writer: impl Write) -> Result<(), io::Error> {
    writeln!(writer, "radius,empirical,theoretical")?;
    for bin in &sample.bins {
        writeln!(writer, "{},{},{}", bin.radius, bin.empirical, bin.theoretical)?;
    }

    Ok(())
}

/// Write one line per particle: `x,y,path_len`.
pub fn write_positions<'a>(
    particles: impl IntoIterator<Item = &'a Particle>,
    mut writer: impl Write,
) -> Result<(), io::Error> {
    writeln!(writer, "x,y,path_len")?;
    for particle in particles {
        let pos = particle.position();
        writeln!(writer, "{},{},{}", pos.x, pos.y, particle.path().len())?;
    }

    Ok(())
}

pub fn write_histogram_csv(
    sample: &HistogramSample,
    path: impl AsRef<Path>,
) -> Result<(), io::Error> {
    let mut file = BufWriter::new(File::create(path)?);
    write_histogram(sample, &mut file)?;
    file.flush()
}

pub fn write_positions_csv<'a>(
    particles: impl IntoIterator<Item = &'a Particle>,
    path: impl AsRef<Path>,
) -> Result<(), io::Error> {
    let mut file = BufWriter::new(File::create(path)?);
    write_positions(particles, &mut file)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use nalgebra::Vector2;

    use crate::{
        config::PathRetention,
        statistics::{compute_histogram, HistogramMode},
    };

    use super::*;

    #[test]
    fn test_write_histogram() {
        let cloud = vec![Vector2::new(3., 4.)];
        let sample = compute_histogram(&cloud, 1., 25, 3, HistogramMode::Cdf);

        let mut out = Vec::new();
        write_histogram(&sample, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "radius,empirical,theoretical");
        assert!(lines[1].starts_with("0,0,"));
        assert!(lines[3].starts_with("5,1,"));
    }

    #[test]
    fn test_write_positions() {
        let mut particle = Particle::new([0, 0, 0], PathRetention::Unbounded);
        particle.displace(Vector2::new(1.5, -2.));

        let mut out = Vec::new();
        write_positions([&particle], &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "x,y,path_len\n1.5,-2,2\n");
    }

    #[test]
    fn test_write_histogram_csv() {
        let cloud = vec![Vector2::new(1., 0.), Vector2::new(0., 2.)];
        let sample = compute_histogram(&cloud, 1., 4, 10, HistogramMode::Pdf);
        let path = std::env::temp_dir().join(format!(
            "random_walks_histogram_{}_{:?}.csv",
            std::process::id(),
            std::thread::current().id()
        ));

        write_histogram_csv(&sample, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(text.lines().count(), 11);
    }
}
