use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::Amount;
use crate::engine::Wallet;
use crate::model::{
    AddressDetails, Command, CustomerDetails, OrderId, OrderRequest, Parcel, PickupId,
    ProductDetails, Route, UserId,
};

/// Errors that can occur when parsing command rows
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("line {line}: unrecognized op '{op}'")]
    UnrecognizedOp { line: usize, op: String },

    #[error("line {line}: {op} missing {field}")]
    MissingField {
        line: usize,
        op: &'static str,
        field: &'static str,
    },
}

/// One command per row; columns that do not apply to an op stay empty.
#[derive(Debug, Deserialize)]
struct InputRow {
    op: String,
    user: Option<UserId>,
    order: Option<OrderId>,
    from_pin: Option<String>,
    to_pin: Option<String>,
    length: Option<f64>,
    breadth: Option<f64>,
    height: Option<f64>,
    weight: Option<f64>,
    declared: Option<f64>,
    insured: Option<bool>,
    pickup: Option<PickupId>,
    customer: Option<String>,
    address: Option<String>,
    awb: Option<String>,
    amount: Option<f64>,
}

#[derive(Debug, Serialize)]
struct OutputRow {
    user: UserId,
    balance: String,
    debits: usize,
    credits: usize,
}

fn require<T>(
    value: Option<T>,
    line: usize,
    op: &'static str,
    field: &'static str,
) -> Result<T, CsvError> {
    value.ok_or(CsvError::MissingField { line, op, field })
}

fn parcel(row: &InputRow, line: usize, op: &'static str) -> Result<Parcel, CsvError> {
    Ok(Parcel {
        length_cm: require(row.length, line, op, "length")?,
        breadth_cm: require(row.breadth, line, op, "breadth")?,
        height_cm: require(row.height, line, op, "height")?,
        weight_kg: require(row.weight, line, op, "weight")?,
    })
}

/// Read commands from a csv file
pub fn read_commands(path: impl AsRef<Path>) -> impl Iterator<Item = Result<Command, CsvError>> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .expect("failed to open csv file");

    reader
        .into_deserialize::<InputRow>()
        .enumerate()
        .map(|(idx, result)| {
            let line = idx + 2; // 1-indexed, skip header
            let row = result.map_err(|source| CsvError::Parse { line, source })?;
            match row.op.as_str() {
                "register" => Ok(Command::Register {
                    user: require(row.user, line, "register", "user")?,
                }),
                "topup" => Ok(Command::TopUp {
                    user: require(row.user, line, "topup", "user")?,
                    amount: Amount::from_float(require(row.amount, line, "topup", "amount")?),
                }),
                "estimate" => Ok(Command::Estimate {
                    user: require(row.user, line, "estimate", "user")?,
                    route: Route {
                        from_pincode: row.from_pin.clone().unwrap_or_default(),
                        to_pincode: row.to_pin.clone().unwrap_or_default(),
                    },
                    parcel: parcel(&row, line, "estimate")?,
                }),
                "create" => {
                    let user = require(row.user, line, "create", "user")?;
                    let parcel = parcel(&row, line, "create")?;
                    Ok(Command::Create {
                        user,
                        request: OrderRequest {
                            customer: CustomerDetails {
                                name: row.customer.unwrap_or_default(),
                                phone: String::new(),
                            },
                            delivery: AddressDetails {
                                line: row.address.unwrap_or_default(),
                                city: String::new(),
                                pincode: row.to_pin.unwrap_or_default(),
                            },
                            product: ProductDetails {
                                description: String::new(),
                                declared_value: Amount::from_float(row.declared.unwrap_or(0.0)),
                            },
                            pickup: row.pickup.unwrap_or(1),
                            parcel,
                            insured: row.insured.unwrap_or(false),
                        },
                    })
                }
                "approve" => Ok(Command::Approve {
                    order: require(row.order, line, "approve", "order")?,
                    awb: require(row.awb, line, "approve", "awb")?,
                }),
                "reject" => Ok(Command::Reject {
                    order: require(row.order, line, "reject", "order")?,
                }),
                other => Err(CsvError::UnrecognizedOp {
                    line,
                    op: other.to_string(),
                }),
            }
        })
}

/// write wallet summaries to stdout in csv format
pub fn write_wallets<'a>(wallets: impl IntoIterator<Item = &'a Wallet>) {
    let stdout = io::stdout();
    let mut writer = csv::Writer::from_writer(stdout.lock());

    for wallet in wallets {
        let row = OutputRow {
            user: wallet.user(),
            balance: wallet.balance().to_string(),
            debits: wallet.debit_count(),
            credits: wallet.credit_count(),
        };
        writer.serialize(&row).expect("failed to write csv row");
    }

    writer.flush().expect("failed to flush csv writer");
}
