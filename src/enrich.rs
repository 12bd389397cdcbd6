use admin::{AdminResolver, LayerFilter, LayerMap, ResolveError};
use document::PlaceDocument;
use tracing::debug;

/// Merge resolver output into the document's `parent` hierarchy.
///
/// Only the first candidate of each layer is used. Layers are appended in
/// the order the resolver listed them; layers with no candidates are skipped.
pub fn merge_hierarchy(mut doc: PlaceDocument, layers: LayerMap) -> PlaceDocument {
    for (layer, matches) in layers {
        let Some(first) = matches.into_iter().next() else {
            debug!(layer = %layer, "admin_layer_without_candidates");
            continue;
        };
        doc.add_parent(&layer, first.name, first.id.to_string(), first.abbr);
    }
    doc
}

/// Look up the administrative areas around the document's centroid and
/// merge them in. No layer filter is applied.
pub async fn resolve_hierarchy(
    doc: PlaceDocument,
    resolver: &dyn AdminResolver,
) -> Result<PlaceDocument, ResolveError> {
    let layers = resolver.lookup(doc.center_point(), &LayerFilter::All).await?;
    debug!(resolver = resolver.name(), layers = layers.len(), "admin_lookup_complete");
    Ok(merge_hierarchy(doc, layers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use admin::{AdminMatch, StubResolver};
    use document::{CenterPoint, Layer};
    use serde_json::json;

    fn doc() -> PlaceDocument {
        PlaceDocument::new(
            "src",
            Layer::Venue,
            "1",
            CenterPoint::new(12.121212, 21.212121).unwrap(),
        )
    }

    fn sample_layers() -> LayerMap {
        [
            ("region", vec![AdminMatch::new(17, "region name")]),
            (
                "country",
                vec![
                    AdminMatch::new(18, "country name").with_abbr("country abbr"),
                    AdminMatch::new(19, "second country"),
                ],
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn first_candidate_per_layer_in_response_order() {
        let merged = merge_hierarchy(doc(), sample_layers());
        let parent = merged.parent();

        assert_eq!(parent.layers().collect::<Vec<_>>(), ["region", "country"]);
        assert_eq!(parent.names("country").unwrap(), ["country name"]);
        assert_eq!(parent.ids("country").unwrap(), ["18"]);
        assert_eq!(
            parent.abbreviations("country").unwrap(),
            [Some("country abbr".to_string())]
        );
        assert_eq!(parent.abbreviations("region").unwrap(), [None]);

        let output = merged.to_output().unwrap();
        assert_eq!(
            output["parent"],
            json!({
                "region": ["region name"],
                "region_id": ["17"],
                "region_a": [null],
                "country": ["country name"],
                "country_id": ["18"],
                "country_a": ["country abbr"],
            })
        );
    }

    #[test]
    fn empty_candidate_list_is_skipped() {
        let mut layers = LayerMap::new();
        layers.insert("borough", Vec::new());
        layers.insert("locality", vec![AdminMatch::new("101750367", "Boston")]);

        let merged = merge_hierarchy(doc(), layers);
        assert_eq!(merged.parent().layers().collect::<Vec<_>>(), ["locality"]);
        assert_eq!(merged.parent().ids("locality").unwrap(), ["101750367"]);
    }

    #[tokio::test]
    async fn resolve_asks_for_all_layers_at_centroid() {
        let resolver = StubResolver::returning(sample_layers());

        let enriched = resolve_hierarchy(doc(), &resolver).await.unwrap();
        assert_eq!(enriched.parent().layers().count(), 2);

        let calls = resolver.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, CenterPoint::new(12.121212, 21.212121).unwrap());
        assert_eq!(calls[0].1, LayerFilter::All);
    }

    #[tokio::test]
    async fn resolver_error_passes_through() {
        let resolver = StubResolver::failing(ResolveError::Lookup("a PiP error occurred".into()));

        let err = resolve_hierarchy(doc(), &resolver).await.unwrap_err();
        assert_eq!(err.body(), "a PiP error occurred");
    }
}
