use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use mageforge::{to_document, Spec, UiListingBuilder};

fn route_spec() -> Spec {
    Spec::new().child(
        "router",
        Spec::new().attr("id", "admin").child(
            "route",
            Spec::new()
                .attr("id", "sales")
                .attr("frontName", "sales")
                .child(
                    "module",
                    Spec::new()
                        .attr("name", "Acme_Sales")
                        .attr("before", "Magento_Backend"),
                ),
        ),
    )
}

fn bench_route_document(c: &mut Criterion) {
    let spec = route_spec();
    c.bench_function("assemble_route_document", |b| {
        b.iter(|| to_document(black_box(&spec), "config"))
    });
}

fn bench_listing_component(c: &mut Criterion) {
    c.bench_function("assemble_listing_component", |b| {
        b.iter(|| {
            UiListingBuilder::new(
                black_box("sales_order_listing"),
                "Acme_Sales::sales_order",
                "sales/order",
            )
            .map(|listing| listing.generate())
        })
    });
}

criterion_group!(benches, bench_route_document, bench_listing_component);
criterion_main!(benches);
