use std::sync::Arc;

use engram_retrieval::similarity::cosine_similarity;
use engram_retrieval::Retriever;
use proptest::prelude::*;
use test_fixtures::FixedEmbedder;

fn finite_vec(len: usize) -> impl Strategy<Value = Vec<f32>> {
    proptest::collection::vec(-100.0f32..100.0, len)
}

proptest! {
    #[test]
    fn cosine_is_always_in_range(a in finite_vec(8), b in finite_vec(8)) {
        let sim = cosine_similarity(&a, &b);
        prop_assert!((-1.0..=1.0).contains(&sim));
        prop_assert!(sim.is_finite());
    }

    #[test]
    fn cosine_is_symmetric(a in finite_vec(8), b in finite_vec(8)) {
        let ab = cosine_similarity(&a, &b);
        let ba = cosine_similarity(&b, &a);
        prop_assert!((ab - ba).abs() < 1e-6);
    }

    #[test]
    fn cosine_with_zero_vector_is_zero(a in finite_vec(8)) {
        prop_assert_eq!(cosine_similarity(&a, &[0.0; 8]), 0.0);
    }

    #[test]
    fn search_never_returns_more_than_min_top_k_store(
        doc_count in 0usize..12,
        top_k in 0usize..20,
    ) {
        let mut retriever = Retriever::new(Arc::new(FixedEmbedder::new(4)));
        let documents: Vec<String> = (0..doc_count).map(|i| format!("document {i}")).collect();
        retriever.index(&documents).unwrap();

        let results = retriever.search_with_top_k("query", top_k).unwrap();
        prop_assert_eq!(results.len(), top_k.min(doc_count));
    }

    #[test]
    fn search_scores_are_descending(doc_count in 1usize..12) {
        let mut retriever = Retriever::new(Arc::new(FixedEmbedder::new(4)));
        let documents: Vec<String> = (0..doc_count).map(|i| format!("document {i}")).collect();
        retriever.index(&documents).unwrap();

        let results = retriever.search_with_top_k("some query text", doc_count).unwrap();
        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }
}
