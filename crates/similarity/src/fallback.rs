use crate::corpus::DocumentCorpus;
use crate::tfidf;

pub const NO_ANSWER: &str = "לא מצאתי תשובה מתאימה לשאלה שלך.";

/// Similarity search over a tenant's corpus, used when no keyword route
/// claims the question.
pub struct FallbackSearch {
    threshold: f32,
}

impl FallbackSearch {
    pub const DEFAULT_THRESHOLD: f32 = 0.1;

    #[must_use]
    pub fn new() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }

    #[must_use]
    pub fn with_threshold(threshold: f32) -> Self {
        Self { threshold }
    }

    /// Narrows the corpus by raw token containment, scores the remainder
    /// with TF-IDF cosine similarity, and answers with the best document
    /// when it clears the threshold.
    #[must_use]
    pub fn reply(&self, corpus: &DocumentCorpus, question: &str) -> String {
        let normalized = question.to_lowercase();
        let keywords: Vec<&str> = normalized.split_whitespace().collect();

        let mut relevant: Vec<&String> = corpus
            .docs()
            .iter()
            .filter(|doc| {
                let lowered = doc.to_lowercase();
                keywords.iter().any(|keyword| lowered.contains(keyword))
            })
            .collect();
        if relevant.is_empty() {
            relevant = corpus.docs().iter().collect();
        }
        // A tenant with no documents at all must short-circuit: fitting a
        // vectorizer on zero documents is degenerate.
        if relevant.is_empty() {
            return NO_ANSWER.to_string();
        }

        let mut texts: Vec<&str> = relevant.iter().map(|doc| doc.as_str()).collect();
        texts.push(question);
        let vectors = tfidf::fit_transform(&texts);
        let (question_vector, doc_vectors) =
            vectors.split_last().expect("vectorized at least the question");

        let best = doc_vectors
            .iter()
            .enumerate()
            .map(|(idx, vector)| (idx, tfidf::cosine_similarity(question_vector, vector)))
            .max_by(|a, b| a.1.total_cmp(&b.1));

        match best {
            Some((idx, score)) if score > self.threshold => {
                log::debug!("Fallback matched document {idx} with score {score:.3}");
                format!("מצאתי מידע קרוב לשאלתך:\n{}", relevant[idx])
            }
            _ => NO_ANSWER.to_string(),
        }
    }
}

impl Default for FallbackSearch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn corpus(docs: &[&str]) -> DocumentCorpus {
        DocumentCorpus::from_texts(docs.iter().map(|d| (*d).to_string()).collect())
    }

    #[test]
    fn empty_corpus_short_circuits() {
        let search = FallbackSearch::new();
        assert_eq!(search.reply(&corpus(&[]), "מה המצב?"), NO_ANSWER);
    }

    #[test]
    fn unrelated_documents_stay_below_the_threshold() {
        let search = FallbackSearch::new();
        let corpus = corpus(&[
            r#"{"productName": "מסך מחשב", "category": "אלקטרוניקה"}"#,
            r#"{"planName": "תוכנית זהב", "amount": 120}"#,
            r#"{"title": "ישיבת צוות", "location": "חדר 3"}"#,
        ]);
        let reply = search.reply(&corpus, "האם לדבורים יש חוש הומור");
        assert_eq!(reply, NO_ANSWER);
    }

    #[test]
    fn close_document_is_returned_verbatim_under_a_prefix() {
        let search = FallbackSearch::new();
        let doc = r#"{"productName": "מסך מחשב", "category": "אלקטרוניקה"}"#;
        let corpus = corpus(&[
            doc,
            r#"{"planName": "תוכנית זהב"}"#,
        ]);
        let reply = search.reply(&corpus, "מסך מחשב אלקטרוניקה");
        assert_eq!(reply, format!("מצאתי מידע קרוב לשאלתך:\n{doc}"));
    }
}
