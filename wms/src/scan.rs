use rand::Rng;

/// Source of scanned locator barcodes
pub trait LocatorScanner: std::fmt::Debug + Send + Sync {
    fn scan(&self) -> String;
}

/// Stand-in for camera scanning: produces `LOC-{n}` with `n` in `0..1000`
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedScanner;

impl LocatorScanner for SimulatedScanner {
    fn scan(&self) -> String {
        let n: u32 = rand::rng().random_range(0..1000);
        format!("LOC-{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_locator_format() {
        let scanner = SimulatedScanner;
        for _ in 0..200 {
            let locator = scanner.scan();
            let n: u32 = locator
                .strip_prefix("LOC-")
                .expect("locator prefix")
                .parse()
                .expect("numeric suffix");
            assert!(n < 1000);
        }
    }
}
