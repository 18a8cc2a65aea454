//! Write a synthetic YOLOv8-style `results.csv` for demos and manual testing.
//! Headers are space-padded the way the vendor writes them, including the
//! stray space in `metrics/precision (B)`.

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Saturating learning curve: rises from 0 toward `plateau`.
fn metric_curve(epoch: f64, plateau: f64, tau: f64, rng: &mut SimpleRng) -> f64 {
    let value = plateau * (1.0 - (-epoch / tau).exp()) + rng.gauss(0.0, 0.01);
    value.clamp(0.0, 1.0)
}

/// Decaying loss curve: falls from `start` toward `floor`.
fn loss_curve(epoch: f64, start: f64, floor: f64, tau: f64, rng: &mut SimpleRng) -> f64 {
    let value = floor + (start - floor) * (-epoch / tau).exp() + rng.gauss(0.0, 0.02);
    value.max(0.0)
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let epochs = 100;
    let output_path = "results.csv";

    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    let headers = [
        "epoch",
        "train/box_loss",
        "train/cls_loss",
        "train/dfl_loss",
        "metrics/precision (B)",
        "metrics/recall (B)",
        "metrics/mAP50 (B)",
        "metrics/mAP50-95 (B)",
        "val/box_loss",
        "val/cls_loss",
        "val/dfl_loss",
    ];
    let padded: Vec<String> = headers.iter().map(|h| format!("{h:>22}")).collect();
    writer
        .write_record(&padded)
        .expect("Failed to write header");

    for epoch in 1..=epochs {
        let e = epoch as f64;
        let record = [
            format!("{epoch:>22}"),
            format!("{:>22.5}", loss_curve(e, 1.8, 0.6, 25.0, &mut rng)),
            format!("{:>22.5}", loss_curve(e, 2.4, 0.8, 20.0, &mut rng)),
            format!("{:>22.5}", loss_curve(e, 1.5, 0.9, 30.0, &mut rng)),
            format!("{:>22.5}", metric_curve(e, 0.82, 18.0, &mut rng)),
            format!("{:>22.5}", metric_curve(e, 0.74, 22.0, &mut rng)),
            format!("{:>22.5}", metric_curve(e, 0.78, 20.0, &mut rng)),
            format!("{:>22.5}", metric_curve(e, 0.55, 28.0, &mut rng)),
            format!("{:>22.5}", loss_curve(e, 1.9, 0.8, 28.0, &mut rng)),
            format!("{:>22.5}", loss_curve(e, 2.6, 1.0, 24.0, &mut rng)),
            format!("{:>22.5}", loss_curve(e, 1.6, 1.0, 32.0, &mut rng)),
        ];
        writer.write_record(&record).expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {epochs} epochs to {output_path}");
}
