use std::path::PathBuf;
use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

const HEADER: [&str; 5] = ["Title", "Type", "Genre", "Premiere", "Watchtime in Million"];

const ADJECTIVES: [&str; 12] = [
    "Silent", "Crimson", "Hidden", "Last", "Broken", "Golden", "Midnight", "Lost", "Wild",
    "Frozen", "Electric", "Distant",
];
const NOUNS: [&str; 12] = [
    "Harbor", "Empire", "Signal", "Garden", "Verdict", "Horizon", "Kingdom", "Echo", "Frontier",
    "Mirror", "Dynasty", "Voyage",
];
const GENRES: [&str; 8] = [
    "Drama", "Comedy", "Action", "Thriller", "Romance", "Documentary", "Sci-Fi", "Crime",
];

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

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// One generated row, already in the source text form.
fn generate_row(rng: &mut SimpleRng, index: usize) -> [String; 5] {
    let title = format!("{} {} {}", rng.pick(&ADJECTIVES), rng.pick(&NOUNS), index + 1);
    let kind = if rng.next_f64() < 0.6 { "Movie" } else { "TV Show" };

    let first = rng.pick(&GENRES);
    let genre = if rng.next_f64() < 0.35 {
        let second = rng.pick(&GENRES);
        if second == first {
            first.to_string()
        } else {
            format!("{first},{second}")
        }
    } else {
        first.to_string()
    };

    // A few dirty cells, like real exports have.
    let premiere = if rng.next_f64() < 0.03 {
        "TBA".to_string()
    } else {
        (1998 + (rng.next_u64() % 26) as i32).to_string()
    };
    let watchtime = if rng.next_f64() < 0.02 {
        "N/A".to_string()
    } else {
        // Log-normal: most titles are modest, a handful are huge.
        let millions = rng.gauss(3.5, 1.0).exp();
        format!("{:.1}M", millions)
    };

    [title, kind.to_string(), genre, premiere, watchtime]
}

fn write_csv(path: &PathBuf, rows: &[[String; 5]]) {
    let mut writer = csv::Writer::from_path(path).expect("Failed to create output file");
    writer.write_record(HEADER).expect("Failed to write header");
    for row in rows {
        writer.write_record(row).expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush output file");
}

fn write_parquet(path: &PathBuf, rows: &[[String; 5]]) {
    let schema = Arc::new(Schema::new(
        HEADER
            .iter()
            .map(|name| Field::new(*name, DataType::Utf8, false))
            .collect::<Vec<_>>(),
    ));

    let columns: Vec<ArrayRef> = (0..HEADER.len())
        .map(|col| {
            let values: Vec<&str> = rows.iter().map(|row| row[col].as_str()).collect();
            Arc::new(StringArray::from(values)) as ArrayRef
        })
        .collect();

    let batch = RecordBatch::try_new(schema.clone(), columns).expect("Failed to create RecordBatch");

    let file = std::fs::File::create(path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");
}

fn main() {
    let output_path = PathBuf::from(
        std::env::args()
            .nth(1)
            .unwrap_or_else(|| "movies.csv".to_string()),
    );

    let mut rng = SimpleRng::new(42);
    let rows: Vec<[String; 5]> = (0..250).map(|i| generate_row(&mut rng, i)).collect();

    match output_path.extension().and_then(|e| e.to_str()) {
        Some("parquet") | Some("pq") => write_parquet(&output_path, &rows),
        _ => write_csv(&output_path, &rows),
    }

    println!("Wrote {} titles to {}", rows.len(), output_path.display());
}
