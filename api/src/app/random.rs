//! Random source for seed data
//!
//! The seeder draws every random choice from a `RandomSource` it is handed,
//! so a seeded generator reproduces the same data set.

use rand::Rng;

/// Length of the tokens appended to generated text
pub const TOKEN_LEN: usize = 8;

/// Randomness needed by the seeder
pub trait RandomSource {
    /// Uniform integer in `0..bound`; always 0 when `bound` is 0
    fn next_int(&mut self, bound: usize) -> usize;

    /// Short lowercase hex token
    fn next_token(&mut self) -> String;

    /// Pick one entry of a non-empty table
    fn pick<'a>(&mut self, table: &[&'a str]) -> &'a str {
        table[self.next_int(table.len())]
    }
}

impl<R: Rng> RandomSource for R {
    fn next_int(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        self.gen_range(0..bound)
    }

    fn next_token(&mut self) -> String {
        let uuid = uuid::Builder::from_random_bytes(self.gen()).into_uuid();
        let mut token = uuid.simple().to_string();
        token.truncate(TOKEN_LEN);
        token
    }
}
