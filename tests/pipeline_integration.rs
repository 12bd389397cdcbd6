use placedoc::{
    AdminMatch, Layer, LayerMap, PipelineStage, PipelineState, RawPlaceParams, StubResolver,
    SynthesisRequest, synthesize,
};
use serde_json::json;

fn full_address_request() -> SynthesisRequest {
    SynthesisRequest::new(
        "datasource",
        Layer::Address,
        RawPlaceParams::from_pairs([
            ("id", " id value "),
            ("name", " name value "),
            ("lat", "12.121212"),
            ("lon", "21.212121"),
            ("house_number", " house_number value "),
            ("street", " street value "),
            ("postcode", " postcode value "),
        ]),
    )
}

fn region_and_country() -> LayerMap {
    [
        ("region", vec![AdminMatch::new(17u64, "region name")]),
        (
            "country",
            vec![AdminMatch::new(18u64, "country name").with_abbr("country abbr")],
        ),
    ]
    .into_iter()
    .collect()
}

#[tokio::test]
async fn synthesize_produces_full_document() {
    let resolver = StubResolver::returning(region_and_country());

    let doc = synthesize(full_address_request(), &resolver)
        .await
        .expect("synthesis should succeed");

    assert_eq!(
        doc,
        json!({
            "name": { "default": "name value" },
            "phrase": { "default": "name value" },
            "center_point": { "lat": 12.121212, "lon": 21.212121 },
            "source": "datasource",
            "layer": "address",
            "source_id": "id value",
            "address_parts": {
                "number": "house_number value",
                "street": "street value",
                "zip": "postcode value"
            },
            "parent": {
                "region": ["region name"],
                "region_id": ["17"],
                "region_a": [null],
                "country": ["country name"],
                "country_id": ["18"],
                "country_a": ["country abbr"]
            }
        })
    );
}

#[tokio::test]
async fn output_key_order_is_stable() {
    let resolver = StubResolver::returning(region_and_country());
    let doc = synthesize(full_address_request(), &resolver).await.unwrap();

    let keys: Vec<&str> = doc
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        keys,
        [
            "name",
            "phrase",
            "center_point",
            "source",
            "layer",
            "source_id",
            "address_parts",
            "parent",
        ]
    );

    let parent_keys: Vec<&str> = doc["parent"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        parent_keys,
        ["region", "region_id", "region_a", "country", "country_id", "country_a"]
    );
}

#[tokio::test]
async fn state_machine_can_be_stepped_manually() {
    let resolver = StubResolver::empty();
    let mut state = PipelineState::new(full_address_request());

    state = state.advance(&resolver).await;
    assert_eq!(state.stage(), PipelineStage::Building);
    assert_eq!(resolver.call_count(), 0);

    state = state.advance(&resolver).await;
    assert_eq!(state.stage(), PipelineStage::Resolving);

    state = state.advance(&resolver).await;
    assert_eq!(state.stage(), PipelineStage::Serializing);
    assert_eq!(resolver.call_count(), 1);

    state = state.advance(&resolver).await;
    assert!(state.is_terminal());
    match state {
        PipelineState::Done(doc) => assert_eq!(doc["parent"], json!({})),
        other => panic!("expected Done, got {:?}", other.stage()),
    }
}
