mod common;

use common::*;
use http::{StatusCode, header};
use serde_json::json;

#[tokio::test]
async fn unknown_order_is_not_found_for_bill_and_download() {
    let app = app().await;

    for uri in ["/bill/999", "/download_bill/999"] {
        let resp = send(&app, get(uri)).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body_text(resp).await, "Order not found");
    }
}

#[tokio::test]
async fn ravi_orders_two_teas() {
    let app = app().await;
    let id = place_order(&app, tea_order("Ravi")).await;

    // Bill view
    let resp = send(&app, get(&format!("/bill/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let bill = body_json(resp).await;
    assert_eq!(bill["id"], id);
    assert_eq!(bill["customer_name"], "Ravi");
    assert_eq!(bill["order_items"].as_array().unwrap().len(), 1);
    assert_eq!(bill["order_items"][0]["name"], "Tea");
    assert_eq!(bill["order_items"][0]["quantity"], 2);
    assert_eq!(bill["subtotal"], 20.0);
    assert_eq!(bill["tax"], 1.0);
    assert_eq!(bill["cgst"], 0.5);
    assert_eq!(bill["sgst"], 0.5);
    assert_eq!(bill["total"], 21.0);
    assert_eq!(bill["datetime"].as_str().unwrap().len(), 19);

    // PDF document
    let resp = send(&app, get(&format!("/download_bill/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::CONTENT_TYPE].to_str().unwrap(),
        "application/pdf"
    );
    assert_eq!(
        resp.headers()[header::CONTENT_DISPOSITION].to_str().unwrap(),
        format!("attachment; filename=\"invoice_{id}.pdf\"")
    );

    let bytes = body_bytes(resp).await;
    assert!(bytes.starts_with(b"%PDF-1.4"));
    let pdf = String::from_utf8_lossy(&bytes);
    assert!(pdf.trim_end().ends_with("%%EOF"));
    assert!(pdf.contains(&format!("( #{id}) Tj")));
    assert!(pdf.contains("( Ravi) Tj"));
    assert!(pdf.contains("(Subtotal:) Tj"));
    assert!(pdf.contains("(Rs.20.00) Tj"));
    assert!(pdf.contains("(CGST \\(2.5%\\):) Tj"));
    assert!(pdf.contains("(SGST \\(2.5%\\):) Tj"));
    assert_eq!(pdf.matches("(Rs.0.50) Tj").count(), 2);
    assert!(pdf.contains("(Grand Total:) Tj"));
    assert!(pdf.contains("(Rs.21.00) Tj"));
}

#[tokio::test]
async fn deleted_item_leaves_menu_but_not_order_snapshot() {
    let app = app().await;
    let cookie = login(&app).await;

    let category = body_json(
        send(
            &app,
            with_cookie(
                json_request("POST", "/admin/categories", &json!({"name": "Meals"})),
                &cookie,
            ),
        )
        .await,
    )
    .await;
    let category_id = category["id"].as_i64().unwrap();

    let item = body_json(
        send(
            &app,
            with_cookie(
                json_request(
                    "POST",
                    "/admin/items",
                    &json!({"category_id": category_id, "name": "Masala Dosa", "price": 60.0}),
                ),
                &cookie,
            ),
        )
        .await,
    )
    .await;
    let item_id = item["id"].as_i64().unwrap();

    let menu_names = |menu: &serde_json::Value| -> Vec<String> {
        menu["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["name"].as_str().unwrap().to_string())
            .collect()
    };

    let menu = body_json(send(&app, get("/menu")).await).await;
    assert_eq!(menu_names(&menu), vec!["Masala Dosa"]);
    assert_eq!(menu["items"][0]["category_name"], "Meals");

    let order_id = place_order(
        &app,
        json!({
            "customer_name": "Meera",
            "items": [{"id": item_id, "name": "Masala Dosa", "price": 60.0, "quantity": 1, "total": 60.0}],
            "subtotal": 60.0,
            "tax": 3.0,
            "total": 63.0
        }),
    )
    .await;

    let resp = send(
        &app,
        with_cookie(
            http::Request::builder()
                .method("DELETE")
                .uri(format!("/admin/items/{item_id}"))
                .body(axum::body::Body::empty())
                .unwrap(),
            &cookie,
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Gone from every catalog listing
    let menu = body_json(send(&app, get("/menu")).await).await;
    assert!(menu_names(&menu).is_empty());
    assert_eq!(menu["categories"][0]["name"], "Meals");

    let dashboard = body_json(send(&app, with_cookie(get("/admin/dashboard"), &cookie)).await).await;
    assert_eq!(dashboard["total_items"], 0);
    assert_eq!(dashboard["recent_items"], json!([]));

    // Still on the bill and the invoice
    let bill = body_json(send(&app, get(&format!("/bill/{order_id}"))).await).await;
    assert_eq!(bill["order_items"][0]["name"], "Masala Dosa");
    assert_eq!(bill["order_items"][0]["price"], 60.0);
    assert_eq!(bill["total"], 63.0);

    let bytes = body_bytes(send(&app, get(&format!("/download_bill/{order_id}"))).await).await;
    assert!(String::from_utf8_lossy(&bytes).contains("(Masala Dosa) Tj"));
}

#[tokio::test]
async fn long_order_invoice_spans_pages() {
    let app = app().await;
    let items: Vec<_> = (0..70)
        .map(|i| json!({"name": format!("Dish {i}"), "price": 10.0, "quantity": 1, "total": 10.0}))
        .collect();
    let id = place_order(
        &app,
        json!({"items": items, "subtotal": 700.0, "tax": 35.0, "total": 735.0}),
    )
    .await;

    let bytes = body_bytes(send(&app, get(&format!("/download_bill/{id}"))).await).await;
    let pdf = String::from_utf8_lossy(&bytes);
    assert!(!pdf.contains("/Count 1 "));
    assert!(pdf.contains("(Dish 69) Tj"));
    assert!(pdf.contains("(Rs.735.00) Tj"));
}
