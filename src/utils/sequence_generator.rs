use mockall_double::double;
use mongodb::{
    bson::{doc, Document},
    options::{FindOneAndUpdateOptions, ReturnDocument},
};

use crate::constants::*;

#[double]
use crate::database::client::DbClient;

/// Generates the next val for a given sequence id
pub async fn get_seq_nxt_val(seq_id: &str, db: &DbClient) -> anyhow::Result<u32> {
    let filter = doc! {"_id": seq_id};
    let update = doc! {"$inc": {"val": 1}};
    let mut options = FindOneAndUpdateOptions::default();
    options.upsert = Some(true);
    options.return_document = Some(ReturnDocument::After);
    let err = anyhow::anyhow!("Not able to get next sequence value for {seq_id}");
    let result = db
        .find_one_and_update::<Document>(COLL_SEQUENCES, filter, update, Some(options))
        .await?
        .ok_or(err)?;
    seq_val_from_doc(&result, seq_id)
}

fn seq_val_from_doc(result: &Document, seq_id: &str) -> anyhow::Result<u32> {
    let val = result.get_i32("val")?;
    // corner case check, there shouldn't be any scenario when val is negative
    if val <= 0 {
        let err = anyhow::anyhow!("Invalid sequence value received: {val} for {seq_id}");
        return Err(err);
    }
    Ok(val as u32)
}
