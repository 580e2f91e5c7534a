// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use olx_partner::{
	advert::AdvertBuilder,
	client::Client,
	credentials::Credentials,
	resource::{BusinessAddress, BusinessProfile},
	url::Url,
};

const CLIENT_ID: u64 = 1234567890;
const CLIENT_SECRET: &str = "client_secret";

fn test_client(server: &MockServer) -> Client {
	let api_base = Url::parse(&server.base_url()).expect("Mock server URL should parse.");
	let client = Client::with_api_base(
		Credentials::new(CLIENT_ID, CLIENT_SECRET),
		api_base,
		reqwest::Client::new(),
	)
	.expect("Client construction should succeed against the mock server.");

	client.set_token("test_token");

	client
}

#[tokio::test]
async fn adverts_list_passes_pagination_and_unwraps_data() {
	let server = MockServer::start_async().await;
	let client = test_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/partner/adverts")
				.query_param("limit", "10")
				.query_param("offset", "20")
				.header("authorization", "Bearer test_token");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"data\":[{\"id\":1}]}");
		})
		.await;
	let adverts = client.adverts().list(10, 20).await.expect("Listing adverts should succeed.");

	assert_eq!(adverts, json!([{ "id": 1 }]));

	mock.assert_async().await;
}

#[tokio::test]
async fn adverts_list_with_zero_limit_skips_pagination() {
	let server = MockServer::start_async().await;
	let client = test_client(&server);
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/partner/adverts");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"data\":[]}");
		})
		.await;
	let adverts = client.adverts().list(0, 0).await.expect("Listing adverts should succeed.");

	assert_eq!(adverts, json!([]));
}

#[tokio::test]
async fn adverts_create_posts_the_builder_payload() {
	let server = MockServer::start_async().await;
	let client = test_client(&server);
	let advert = AdvertBuilder::new()
		.title("Mountain bike")
		.description("Barely used.")
		.category_id(1423)
		.contact("Jan", "+48123123123")
		.location(1, None, None)
		.price(1500, Some("PLN"))
		.build();
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/partner/adverts").json_body(advert.clone());
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"data\":{\"id\":99,\"status\":\"new\"}}");
		})
		.await;
	let created =
		client.adverts().create(advert).await.expect("Creating an advert should succeed.");

	assert_eq!(created, json!({ "id": 99, "status": "new" }));

	mock.assert_async().await;
}

#[tokio::test]
async fn adverts_delete_hits_the_id_path() {
	let server = MockServer::start_async().await;
	let client = test_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/partner/adverts/42");
			then.status(204);
		})
		.await;

	client.adverts().delete(42).await.expect("Deleting an advert should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn advert_commands_post_to_the_commands_path() {
	let server = MockServer::start_async().await;
	let client = test_client(&server);
	let activate_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/partner/adverts/7/commands")
				.json_body(json!({ "command": "activate" }));
			then.status(204);
		})
		.await;
	let deactivate_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/partner/adverts/8/commands")
				.json_body(json!({ "command": "deactivate", "is_success": true }));
			then.status(204);
		})
		.await;

	client.adverts().activate(7).await.expect("Activating an advert should succeed.");
	client.adverts().deactivate(8, true).await.expect("Deactivating an advert should succeed.");

	activate_mock.assert_async().await;
	deactivate_mock.assert_async().await;
}

#[tokio::test]
async fn threads_list_passes_every_filter() {
	let server = MockServer::start_async().await;
	let client = test_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/partner/threads")
				.query_param("advert_id", "3")
				.query_param("interlocutor_id", "4")
				.query_param("limit", "2")
				.query_param("offset", "1");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"data\":[]}");
		})
		.await;

	client
		.threads()
		.list(Some(3), Some(4), 2, 1)
		.await
		.expect("Listing threads should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn threads_reply_posts_text_and_attachments() {
	let server = MockServer::start_async().await;
	let client = test_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/partner/threads/5/messages").json_body(json!({
				"text": "Still available?",
				"attachments": ["https://example.com/a.jpg"],
			}));
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"data\":{\"id\":11}}");
		})
		.await;
	let attachments = vec!["https://example.com/a.jpg".to_owned()];
	let message = client
		.threads()
		.reply(5, "Still available?", Some(&attachments))
		.await
		.expect("Replying to a thread should succeed.");

	assert_eq!(message, json!({ "id": 11 }));

	mock.assert_async().await;
}

#[tokio::test]
async fn thread_commands_share_the_commands_path() {
	let server = MockServer::start_async().await;
	let client = test_client(&server);
	let read_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/partner/threads/5/commands")
				.json_body(json!({ "command": "mark-as-read" }));
			then.status(204);
		})
		.await;
	let favourite_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/partner/threads/6/commands")
				.json_body(json!({ "command": "set-favourite", "is_favourite": true }));
			then.status(204);
		})
		.await;

	client.threads().mark_as_read(5).await.expect("Marking a thread read should succeed.");
	client.threads().set_favourite(6, true).await.expect("Favouriting a thread should succeed.");

	read_mock.assert_async().await;
	favourite_mock.assert_async().await;
}

#[tokio::test]
async fn users_me_endpoints_resolve_their_paths() {
	let server = MockServer::start_async().await;
	let client = test_client(&server);
	let me_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/partner/users/me");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"data\":{\"id\":7}}");
		})
		.await;
	let balance_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/partner/users/me/account-balance");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"data\":{\"sum\":12.5}}");
		})
		.await;
	let me = client.users().me().await.expect("Fetching the user should succeed.");
	let balance =
		client.users().account_balance().await.expect("Fetching the balance should succeed.");

	assert_eq!(me, json!({ "id": 7 }));
	assert_eq!(balance, json!({ "sum": 12.5 }));

	me_mock.assert_async().await;
	balance_mock.assert_async().await;
}

#[tokio::test]
async fn business_profile_update_puts_the_assembled_body() {
	let server = MockServer::start_async().await;
	let client = test_client(&server);
	let profile = BusinessProfile {
		name: "Gentor".into(),
		description: "Classifieds tooling.".into(),
		phones: vec!["+359123456".into()],
		address: BusinessAddress {
			street: "Vitosha".into(),
			number: "1".into(),
			postcode: "1000".into(),
			city: "Sofia".into(),
		},
		subdomain: "gentor".into(),
		website_url: "https://gentor.dev".into(),
	};
	let mock = server
		.mock_async(|when, then| {
			when.method(PUT).path("/partner/users-business/me").json_body(json!({
				"name": "Gentor",
				"description": "Classifieds tooling.",
				"phones": ["+359123456"],
				"address": {
					"street": "Vitosha",
					"number": "1",
					"postcode": "1000",
					"city": "Sofia",
				},
				"subdomain": "gentor",
				"website_url": "https://gentor.dev",
			}));
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"data\":{\"name\":\"Gentor\"}}");
		})
		.await;
	let updated = client
		.users_business()
		.update(&profile)
		.await
		.expect("Updating the business profile should succeed.");

	assert_eq!(updated, json!({ "name": "Gentor" }));

	mock.assert_async().await;
}

#[tokio::test]
async fn logos_and_banners_resolve_their_paths() {
	let server = MockServer::start_async().await;
	let client = test_client(&server);
	let logo_mock = server
		.mock_async(|when, then| {
			when.method(PUT)
				.path("/partner/users-business/me/logos")
				.json_body(json!({ "url": "https://example.com/logo.png" }));
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"data\":{\"id\":2}}");
		})
		.await;
	let banner_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/partner/users-business/me/logos/2");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"data\":{\"id\":2}}");
		})
		.await;

	client
		.users_business()
		.post_logo("https://example.com/logo.png")
		.await
		.expect("Uploading a logo should succeed.");

	let banner = client
		.users_business()
		.banners(Some(2))
		.await
		.expect("Fetching one banner should succeed.");

	assert_eq!(banner, json!({ "id": 2 }));

	logo_mock.assert_async().await;
	banner_mock.assert_async().await;
}

#[tokio::test]
async fn category_attributes_and_city_districts_unwrap_data() {
	let server = MockServer::start_async().await;
	let client = test_client(&server);
	let attributes_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/partner/categories/1423/attributes");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"data\":[{\"code\":\"condition\"}]}");
		})
		.await;
	let districts_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/partner/cities/1/districts");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"data\":[{\"id\":10}]}");
		})
		.await;
	let attributes = client
		.categories()
		.attributes(1423)
		.await
		.expect("Fetching category attributes should succeed.");
	let districts =
		client.cities().districts(1).await.expect("Fetching city districts should succeed.");

	assert_eq!(attributes, json!([{ "code": "condition" }]));
	assert_eq!(districts, json!([{ "id": 10 }]));

	attributes_mock.assert_async().await;
	districts_mock.assert_async().await;
}
