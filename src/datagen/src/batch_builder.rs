use std::sync::Arc;

use arrow::array::ArrayRef;
use arrow::array::Float64Builder;
use arrow::array::Int16Builder;
use arrow::array::Int32Builder;
use arrow::array::Int64Builder;
use arrow::array::Int8Builder;
use arrow::array::StringBuilder;
use arrow::array::TimestampSecondBuilder;
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;

use crate::error::Result;
use crate::products::Product;
use crate::reviews::Review;

pub struct ProductBatchBuilder {
    id: Int64Builder,
    category: StringBuilder,
    name: StringBuilder,
    price_usd: Float64Builder,
    inventory_count: Int32Builder,
    margin: Float64Builder,
    schema: SchemaRef,
    len: usize,
}

impl ProductBatchBuilder {
    pub fn new(cap: usize, schema: SchemaRef) -> Self {
        Self {
            id: Int64Builder::with_capacity(cap),
            category: StringBuilder::with_capacity(cap, cap * 16),
            name: StringBuilder::with_capacity(cap, cap * 48),
            price_usd: Float64Builder::with_capacity(cap),
            inventory_count: Int32Builder::with_capacity(cap),
            margin: Float64Builder::with_capacity(cap),
            schema,
            len: 0,
        }
    }

    pub fn write_product(&mut self, product: &Product) {
        self.id.append_value(product.id);
        self.category.append_value(&product.category);
        self.name.append_value(&product.name);
        self.price_usd.append_value(product.price_usd);
        self.inventory_count.append_value(product.inventory_count);
        self.margin.append_value(product.margin);

        self.len += 1;
    }

    pub fn build_record_batch(&mut self) -> Result<RecordBatch> {
        let cols: Vec<ArrayRef> = vec![
            Arc::new(self.id.finish()),
            Arc::new(self.category.finish()),
            Arc::new(self.name.finish()),
            Arc::new(self.price_usd.finish()),
            Arc::new(self.inventory_count.finish()),
            Arc::new(self.margin.finish()),
        ];

        let batch = RecordBatch::try_new(self.schema.clone(), cols)?;

        self.len = 0;
        Ok(batch)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

pub struct ReviewBatchBuilder {
    review_id: Int64Builder,
    product_id: Int64Builder,
    product_name: StringBuilder,
    product_category: StringBuilder,
    rating: Int8Builder,
    review_text: StringBuilder,
    reviewer_name: StringBuilder,
    reviewer_persona: StringBuilder,
    reviewer_age: Int16Builder,
    reviewer_location: StringBuilder,
    review_date: TimestampSecondBuilder,
    schema: SchemaRef,
    // id of the next written review, survives batch boundaries
    next_id: i64,
    len: usize,
}

impl ReviewBatchBuilder {
    pub fn new(cap: usize, schema: SchemaRef, first_id: i64) -> Self {
        Self {
            review_id: Int64Builder::with_capacity(cap),
            product_id: Int64Builder::with_capacity(cap),
            product_name: StringBuilder::with_capacity(cap, cap * 48),
            product_category: StringBuilder::with_capacity(cap, cap * 16),
            rating: Int8Builder::with_capacity(cap),
            review_text: StringBuilder::with_capacity(cap, cap * 256),
            reviewer_name: StringBuilder::with_capacity(cap, cap * 16),
            reviewer_persona: StringBuilder::with_capacity(cap, cap * 16),
            reviewer_age: Int16Builder::with_capacity(cap),
            reviewer_location: StringBuilder::with_capacity(cap, cap * 16),
            review_date: TimestampSecondBuilder::with_capacity(cap),
            schema,
            next_id: first_id,
            len: 0,
        }
    }

    pub fn write_review(&mut self, review: &Review) -> i64 {
        let id = self.next_id;
        self.review_id.append_value(id);
        self.product_id.append_value(review.product.id);
        self.product_name.append_value(&review.product.name);
        self.product_category.append_value(&review.product.category);
        self.rating.append_value(review.rating);
        self.review_text.append_value(&review.text);
        self.reviewer_name.append_value(&review.reviewer.name);
        self.reviewer_persona
            .append_value(review.reviewer.persona.to_string());
        self.reviewer_age.append_value(review.reviewer.age);
        self.reviewer_location.append_value(review.reviewer.location);
        self.review_date.append_value(review.created_at);

        self.next_id += 1;
        self.len += 1;

        id
    }

    pub fn build_record_batch(&mut self) -> Result<RecordBatch> {
        let cols: Vec<ArrayRef> = vec![
            Arc::new(self.review_id.finish()),
            Arc::new(self.product_id.finish()),
            Arc::new(self.product_name.finish()),
            Arc::new(self.product_category.finish()),
            Arc::new(self.rating.finish()),
            Arc::new(self.review_text.finish()),
            Arc::new(self.reviewer_name.finish()),
            Arc::new(self.reviewer_persona.finish()),
            Arc::new(self.reviewer_age.finish()),
            Arc::new(self.reviewer_location.finish()),
            Arc::new(self.review_date.finish()),
        ];

        let batch = RecordBatch::try_new(self.schema.clone(), cols)?;

        self.len = 0;
        Ok(batch)
    }

    pub fn next_id(&self) -> i64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
