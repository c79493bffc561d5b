use docchat_embed::get_default_embedder;

#[test]
fn fake_embedder_shapes_and_determinism() {
    // Force the fake embedder to avoid loading model weights
    std::env::set_var("APP_USE_FAKE_EMBEDDINGS", "1");

    let embedder = get_default_embedder().expect("embedder");
    let texts = vec!["hello world".to_string(), "hello world".to_string()];
    let embs = embedder.embed_batch(&texts).expect("embed_batch");
    let v1 = &embs[0];
    let v2 = &embs[1];

    assert_eq!(v1.len(), 384, "embedding dim is 384");

    // Norm approximately 1.0
    let norm: f32 = v1.iter().map(|x| x * x).sum::<f32>().sqrt();
    assert!((norm - 1.0).abs() <= 1e-3, "vector is L2-normalized (norm={norm})");

    // Deterministic for same input
    for (a, b) in v1.iter().zip(v2.iter()) {
        assert!((a - b).abs() <= 1e-6);
    }
}

#[test]
fn fake_embedder_separates_unrelated_texts() {
    std::env::set_var("APP_USE_FAKE_EMBEDDINGS", "1");

    let embedder = get_default_embedder().expect("embedder");
    let texts = vec![
        "opening hours of the archive".to_string(),
        "opening hours of the archive today".to_string(),
        "quantum entanglement decoherence".to_string(),
    ];
    let embs = embedder.embed_batch(&texts).expect("embed_batch");
    let dot = |a: &[f32], b: &[f32]| a.iter().zip(b).map(|(x, y)| x * y).sum::<f32>();

    let near = dot(&embs[0], &embs[1]);
    let far = dot(&embs[0], &embs[2]);
    assert!(
        near > far,
        "texts sharing tokens should score higher ({near} vs {far})"
    );
}
