use super::*;

use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// JSON form of the pattern database.
///
/// Single entries are keyed by `twist * 10 + slot`, pair entries by
/// `twist1 * 1000 + slot1 * 100 + twist2 * 10 + slot2`.
#[derive(Serialize, Deserialize)]
struct Stored {
    single: Vec<BTreeMap<u16, u8>>,
    pairs: Vec<StoredPair>,
}

#[derive(Serialize, Deserialize)]
struct StoredPair {
    cubies: [u8; 2],
    distances: BTreeMap<u16, u8>,
}

fn single_key(at: Placement) -> u16 {
    at.twist as u16 * 10 + at.slot as u16
}

fn pair_key(first: Placement, second: Placement) -> u16 {
    single_key(first) * 100 + single_key(second)
}

fn decode_single(key: u16) -> anyhow::Result<Placement> {
    let (twist, slot) = (key / 10, key % 10);
    ensure!(twist < 3 && (slot as usize) < SLOTS, "Bad placement key {}", key);
    Ok(Placement {
        slot: slot as u8,
        twist: twist as u8,
    })
}

fn decode_pair(key: u16) -> anyhow::Result<(Placement, Placement)> {
    let first = decode_single(key / 100).with_context(|| format!("in pair key {}", key))?;
    let second = decode_single(key % 100).with_context(|| format!("in pair key {}", key))?;
    ensure!(first.slot != second.slot, "Pair key {} puts both cubies in one slot", key);
    Ok((first, second))
}

impl PatternDatabase {
    pub fn save(&self, mut writer: impl std::io::Write) -> anyhow::Result<()> {
        let single = self
            .single
            .iter()
            .map(|table| {
                (0..PLACEMENTS)
                    .map(Placement::from_index)
                    .map(|at| (single_key(at), table[at.index()]))
                    .collect()
            })
            .collect();

        let pairs = PAIRS
            .iter()
            .zip(&self.pairs)
            .map(|(&(a, b), table)| {
                let mut distances = BTreeMap::new();
                for first in (0..PLACEMENTS).map(Placement::from_index) {
                    for second in (0..PLACEMENTS).map(Placement::from_index) {
                        let distance = table[pair_index(first, second)];
                        if distance != UNREACHED {
                            distances.insert(pair_key(first, second), distance);
                        }
                    }
                }
                StoredPair {
                    cubies: [a, b],
                    distances,
                }
            })
            .collect();

        serde_json::to_writer(&mut writer, &Stored { single, pairs })?;
        writer.flush()?;
        Ok(())
    }

    pub fn load(reader: impl std::io::Read) -> anyhow::Result<Self> {
        let stored: Stored = serde_json::from_reader(reader)?;

        ensure!(
            stored.single.len() == SLOTS,
            "Expected {} single tables, found {}",
            SLOTS,
            stored.single.len()
        );
        let mut single = [[UNREACHED; PLACEMENTS]; SLOTS];
        for (cubie, (table, entries)) in single.iter_mut().zip(&stored.single).enumerate() {
            ensure!(
                entries.len() == PLACEMENTS,
                "Cubie {} has {} entries, expected {}",
                cubie,
                entries.len(),
                PLACEMENTS
            );
            for (&key, &distance) in entries {
                table[decode_single(key)?.index()] = distance;
            }
            ensure!(
                table[Placement::home(cubie as u8).index()] == 0,
                "Cubie {} is not solved at home",
                cubie
            );
        }

        ensure!(
            stored.pairs.len() == PAIRS.len(),
            "Expected {} pair tables, found {}",
            PAIRS.len(),
            stored.pairs.len()
        );
        let mut pairs = Vec::with_capacity(PAIRS.len());
        for (&(a, b), entry) in PAIRS.iter().zip(&stored.pairs) {
            ensure!(
                entry.cubies == [a, b],
                "Expected pair {:?}, found {:?}",
                [a, b],
                entry.cubies
            );
            ensure!(
                entry.distances.len() == PLACEMENTS * (PLACEMENTS - 3),
                "Pair {:?} has {} entries",
                entry.cubies,
                entry.distances.len()
            );
            let mut table = vec![UNREACHED; PLACEMENTS * PLACEMENTS];
            for (&key, &distance) in &entry.distances {
                let (first, second) = decode_pair(key)?;
                table[pair_index(first, second)] = distance;
            }
            ensure!(
                table[pair_index(Placement::home(a), Placement::home(b))] == 0,
                "Pair {:?} is not solved at home",
                entry.cubies
            );
            pairs.push(table);
        }

        Ok(PatternDatabase { single, pairs })
    }

    pub fn save_to_path(&self, path: &Path) -> anyhow::Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        self.save(std::io::BufWriter::new(file))
    }

    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let start = std::time::Instant::now();
        let file =
            std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
        let db = Self::load(std::io::BufReader::new(file))
            .with_context(|| format!("loading {}", path.display()))?;
        log::info!("Loaded pattern database from {}, took {:?}", path.display(), start.elapsed());
        Ok(db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved() -> serde_json::Value {
        let mut bytes = Vec::new();
        DATABASE.save(&mut bytes).unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn reload_is_identical() {
        let mut bytes = Vec::new();
        DATABASE.save(&mut bytes).unwrap();
        assert_eq!(PatternDatabase::load(bytes.as_slice()).unwrap(), *DATABASE);
    }

    #[test]
    fn keys_follow_encoding() {
        let value = saved();
        assert_eq!(value["single"][7]["7"], 0);
        assert_eq!(value["pairs"][0]["cubies"], serde_json::json!([0, 1]));
        assert_eq!(value["pairs"][0]["distances"]["1"], 0);
        assert_eq!(value["single"].as_array().unwrap().len(), SLOTS);
    }

    #[test]
    fn bad_key_is_rejected() {
        let mut value = saved();
        let table = value["single"][0].as_object_mut().unwrap();
        let distance = table.remove("0").unwrap();
        table.insert("38".to_string(), distance);

        let bytes = serde_json::to_vec(&value).unwrap();
        assert!(PatternDatabase::load(bytes.as_slice()).is_err());
    }

    #[test]
    fn missing_pair_is_rejected() {
        let mut value = saved();
        value["pairs"].as_array_mut().unwrap().pop();

        let bytes = serde_json::to_vec(&value).unwrap();
        assert!(PatternDatabase::load(bytes.as_slice()).is_err());
    }

    #[test]
    fn save_to_path_round_trip() {
        let path = std::env::temp_dir().join(format!("cornercube-db-{}.json", std::process::id()));
        DATABASE.save_to_path(&path).unwrap();
        let loaded = PatternDatabase::load_from_path(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded.unwrap(), *DATABASE);
    }
}
