/*
 * Responsibility
 * - tokio runtime の起動
 * - app::run() の呼び出し（ロジックは置かない）
 */
use anyhow::Result;

use guess_who_api::app;

#[tokio::main]
async fn main() -> Result<()> {
    app::run().await
}
