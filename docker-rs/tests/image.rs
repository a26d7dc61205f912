// Copyright (c) Microsoft. All rights reserved.

mod mock;

use docker_engine::{BuildApi, DockerApiClient, Filters, ImageApi, PartialRecord};
use http::{Method, StatusCode};

use mock::MockTransport;

#[tokio::test]
async fn image_list_decodes_summaries() {
    let client = DockerApiClient::new(MockTransport::respond(
        StatusCode::OK,
        r#"[{
            "Id": "sha256:e216a057b1cb",
            "ParentId": "",
            "RepoTags": ["mcr.microsoft.com/azureiotedge-hub:1.4"],
            "RepoDigests": null,
            "Created": 1644009612,
            "Size": 172064416,
            "SharedSize": -1,
            "Containers": 2
        }]"#,
    ));

    let images = client.image_list(false, None, true).await.unwrap();
    let image = &images[0];
    assert_eq!(Some(""), image.parent_id());
    assert_eq!(Some(-1), image.shared_size());
    assert_eq!(Some(2), image.containers());
    // null on a non-nullable field counts as absent
    assert!(!image.is_initialized("RepoDigests"));
    assert!(!image.is_initialized("Labels"));

    assert_eq!(
        "http://localhost/v1.43/images/json?all=false&digests=true",
        client.transport().last_uri()
    );
}

#[tokio::test]
async fn image_delete_keeps_reference_separators() {
    let client = DockerApiClient::new(MockTransport::respond(
        StatusCode::OK,
        r#"[{"Untagged":"mcr.microsoft.com/azureiotedge-hub:1.4"},{"Deleted":"sha256:e216a057b1cb"}]"#,
    ));

    let deleted = client
        .image_delete("mcr.microsoft.com/azureiotedge-hub:1.4", false, true)
        .await
        .unwrap();
    assert_eq!(2, deleted.len());
    assert_eq!(vec!["untagged"], deleted[0].initialized_fields());
    assert_eq!(Some("sha256:e216a057b1cb"), deleted[1].deleted());

    client.transport().with_last_request(|request| {
        assert_eq!(Method::DELETE, *request.method());
        assert_eq!(
            "/v1.43/images/mcr.microsoft.com/azureiotedge-hub:1.4",
            request.uri().path()
        );
    });
}

#[tokio::test]
async fn image_tag_and_prune() {
    let client = DockerApiClient::new(MockTransport::new(|request| {
        let body = if request.uri().path().ends_with("/prune") {
            r#"{"ImagesDeleted":null,"SpaceReclaimed":0}"#
        } else {
            ""
        };
        Ok(mock::response(StatusCode::CREATED, body))
    }));

    client
        .image_tag("alpine", "localhost:5000/alpine", Some("3.18"))
        .await
        .unwrap();
    assert_eq!(
        "http://localhost/v1.43/images/alpine/tag?repo=localhost%3A5000%2Falpine&tag=3.18",
        client.transport().last_uri()
    );

    let pruned = client
        .image_prune(Some(&Filters::new().with("dangling", "true")))
        .await
        .unwrap();
    assert_eq!(Some(0), pruned.space_reclaimed());
    assert!(pruned.is_initialized("SpaceReclaimed"));
    assert!(!pruned.is_initialized("ImagesDeleted"));
}

#[tokio::test]
async fn build_prune_sends_keep_storage() {
    let client = DockerApiClient::new(MockTransport::respond(
        StatusCode::OK,
        r#"{"CachesDeleted":["abc123"],"SpaceReclaimed":4096}"#,
    ));

    let pruned = client.build_prune(Some(1_000_000), true, None).await.unwrap();
    assert_eq!(Some(4096), pruned.space_reclaimed());
    assert_eq!(
        "http://localhost/v1.43/build/prune?keep-storage=1000000&all=true",
        client.transport().last_uri()
    );
}
