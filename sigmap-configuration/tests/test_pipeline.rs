use futures::{StreamExt, stream};
use pretty_assertions::assert_eq;
use sigmap::{MappingError, MappingErrorKind, Operator, Response, ResponseStreamExt};
use sigmap_configuration::{ConfigError, ConfigPipeline, Decode, Decoded, StatusFilter};

#[test]
fn test_pipeline_deserialize() {
    let yaml = r#"
filter:
  Range:
    low: 200
    high: 204
decode:
  StringAtKeyPath: data.name
"#;

    let config: ConfigPipeline = serde_saphyr::from_str(yaml).expect("failed to deserialize");

    assert_eq!(
        config,
        ConfigPipeline {
            filter: Some(StatusFilter::Range { low: 200, high: 204 }),
            decode: Decode::StringAtKeyPath("data.name".to_owned()),
        }
    );
}

#[test]
fn test_named_filter_deserialize() {
    let yaml = r#"
filter: Successful
decode: Json
"#;

    let config: ConfigPipeline = serde_saphyr::from_str(yaml).expect("failed to deserialize");

    assert_eq!(config.filter, Some(StatusFilter::Successful));
    assert_eq!(config.decode, Decode::Json);
}

#[test]
fn test_defaults() {
    let config: ConfigPipeline = serde_saphyr::from_str("{}").expect("failed to deserialize");
    assert_eq!(config, ConfigPipeline::default());
    assert_eq!(config.filter, None);
    assert_eq!(config.decode, Decode::Response);
}

#[test]
fn test_pipeline_roundtrip() {
    let config = ConfigPipeline {
        filter: Some(StatusFilter::Code(304)),
        decode: Decode::JsonAllowingEmpty,
    };

    let yaml = serde_saphyr::to_string(&config).expect("failed to serialize");
    let deserialized: ConfigPipeline =
        serde_saphyr::from_str(&yaml).expect("failed to deserialize");

    assert_eq!(deserialized, config);
}

#[test]
fn test_invalid_configurations_are_rejected() {
    let inverted = ConfigPipeline {
        filter: Some(StatusFilter::Range { low: 500, high: 400 }),
        decode: Decode::String,
    };
    assert_eq!(
        inverted.into_pipeline().err(),
        Some(ConfigError::InvalidRange { low: 500, high: 400 })
    );

    let bad_code = ConfigPipeline {
        filter: Some(StatusFilter::Code(42)),
        decode: Decode::String,
    };
    assert_eq!(
        bad_code.into_pipeline().err(),
        Some(ConfigError::InvalidStatusCode(42))
    );

    let bad_key_path = ConfigPipeline {
        filter: None,
        decode: Decode::StringAtKeyPath(String::new()),
    };
    assert_eq!(
        bad_key_path.into_pipeline().err(),
        Some(ConfigError::InvalidKeyPath(String::new()))
    );
}

#[test]
fn test_pipeline_applies_filter_then_decode() {
    let yaml = r#"
filter: Successful
decode:
  StringAtKeyPath: user.name
"#;
    let pipeline = serde_saphyr::from_str::<ConfigPipeline>(yaml)
        .unwrap()
        .into_pipeline()
        .unwrap();

    let body = r#"{"user": {"name": "ferris"}}"#;
    match pipeline.apply(Response::new(200, body).into()) {
        Ok(Decoded::String(name)) => assert_eq!(name, "ferris"),
        other => panic!("unexpected output: {other:?}"),
    }

    let error = pipeline
        .apply(Response::new(503, body).into())
        .unwrap_err();
    assert_eq!(error.kind(), MappingErrorKind::StatusCode);
}

#[tokio::test]
async fn test_pipeline_on_stream() {
    let pipeline = ConfigPipeline {
        filter: Some(StatusFilter::SuccessfulAndRedirect),
        decode: Decode::Json,
    }
    .into_pipeline()
    .unwrap();

    let signal = stream::iter(vec![
        Ok::<_, MappingError>(Response::new(200, r#"{"page": 1}"#)),
        Ok(Response::new(302, r#"{"page": 2}"#)),
        Ok(Response::new(404, "{}")),
        Ok(Response::new(200, r#"{"page": 4}"#)),
    ]);

    let results: Vec<_> = signal.map_with(pipeline).collect().await;

    assert_eq!(results.len(), 3);
    let pages: Vec<_> = results[..2]
        .iter()
        .map(|result| match result {
            Ok(Decoded::Json(value)) => value["page"].as_u64(),
            _ => None,
        })
        .collect();
    assert_eq!(pages, vec![Some(1), Some(2)]);
    assert_eq!(
        results[2].as_ref().map(drop).unwrap_err().kind(),
        MappingErrorKind::StatusCode
    );
}
