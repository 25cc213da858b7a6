// Translate command - translates an argument or everything read from a reader

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::translator::Translator;

/// Translate `text` when given, otherwise read the whole of `reader` and translate that.
pub async fn translate_input<R>(
    translator: &Translator,
    text: Option<String>,
    mut reader: R,
) -> Result<String, String>
where
    R: AsyncRead + Unpin,
{
    let input = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            reader
                .read_to_string(&mut buffer)
                .await
                .map_err(|e| format!("Failed to read input: {}", e))?;
            buffer
        }
    };

    Ok(translator.translate(&input).await)
}

#[cfg(test)]
#[path = "translate_test.rs"]
mod tests;
