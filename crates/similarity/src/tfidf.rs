//! Term-frequency / inverse-document-frequency weighting.
//!
//! Standard vectorizer behavior, which the fallback threshold was tuned
//! against: tokens are runs of two or more word characters (Unicode-aware,
//! so Hebrew counts), term counts are raw, idf is smoothed
//! (`ln((1+n)/(1+df)) + 1`), and every row is L2-normalized.

use std::collections::{BTreeMap, HashMap, HashSet};

/// Lowercased word tokens of at least two characters.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}

/// Fits the combined vocabulary of `texts` and returns one weighted,
/// L2-normalized vector per text.
#[must_use]
pub fn fit_transform(texts: &[&str]) -> Vec<Vec<f32>> {
    let tokenized: Vec<Vec<String>> = texts.iter().map(|text| tokenize(text)).collect();

    let mut vocabulary: BTreeMap<&str, usize> = BTreeMap::new();
    for tokens in &tokenized {
        for token in tokens {
            let next = vocabulary.len();
            vocabulary.entry(token.as_str()).or_insert(next);
        }
    }

    let n_docs = tokenized.len();
    let mut document_frequency = vec![0usize; vocabulary.len()];
    for tokens in &tokenized {
        let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for token in unique {
            if let Some(&idx) = vocabulary.get(token) {
                document_frequency[idx] += 1;
            }
        }
    }

    let idf: Vec<f32> = document_frequency
        .iter()
        .map(|&df| ((1.0 + n_docs as f32) / (1.0 + df as f32)).ln() + 1.0)
        .collect();

    tokenized
        .iter()
        .map(|tokens| {
            let mut counts: HashMap<usize, f32> = HashMap::new();
            for token in tokens {
                if let Some(&idx) = vocabulary.get(token.as_str()) {
                    *counts.entry(idx).or_insert(0.0) += 1.0;
                }
            }
            let mut row = vec![0.0f32; vocabulary.len()];
            for (idx, count) in counts {
                row[idx] = count * idf[idx];
            }
            l2_normalize(&mut row);
            row
        })
        .collect()
}

fn l2_normalize(row: &mut [f32]) {
    let norm: f32 = row.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for value in row.iter_mut() {
            *value /= norm;
        }
    }
}

#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}
