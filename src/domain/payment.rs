use super::amount::{Amount, RawAmount};
use super::credentials::MerchantCredentials;
use super::digest::hash_sequence;
use crate::error::{PaymentError, Result};
use serde::{Deserialize, Deserializer};

/// Reserved gateway slots between `udf5` and the salt in the request hash.
const RESERVED_SLOTS: usize = 5;

/// Optional pass-through fields (`udf1`..`udf5`) echoed back by the gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDefinedFields([String; 5]);

impl UserDefinedFields {
    pub fn new(udf1: &str, udf2: &str, udf3: &str, udf4: &str, udf5: &str) -> Self {
        Self([udf1, udf2, udf3, udf4, udf5].map(str::to_string))
    }

    fn from_wire(fields: [Option<String>; 5]) -> Self {
        Self(fields.map(Option::unwrap_or_default))
    }

    /// `udf1` first.
    pub fn ascending(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// `udf5` first, as the response hash lists them.
    pub fn descending(&self) -> impl Iterator<Item = &str> {
        self.0.iter().rev().map(String::as_str)
    }
}

/// The `paymentData` object posted by checkout.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentData {
    #[serde(default, deserialize_with = "text_or_number")]
    pub txnid: Option<String>,
    pub amount: Option<RawAmount>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub productinfo: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub firstname: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub udf1: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub udf2: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub udf3: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub udf4: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub udf5: Option<String>,
}

/// The `params` object relayed from the gateway's redirect or callback.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackParams {
    #[serde(default, deserialize_with = "text_or_number")]
    pub hash: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub txnid: Option<String>,
    pub amount: Option<RawAmount>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub firstname: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub productinfo: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub udf1: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub udf2: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub udf3: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub udf4: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub udf5: Option<String>,
}

/// A validated checkout request, ready to be hashed.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    pub txnid: String,
    pub amount: Amount,
    pub productinfo: String,
    pub firstname: String,
    pub email: String,
    pub udf: UserDefinedFields,
}

impl PaymentRequest {
    /// `key|txnid|amount|productinfo|firstname|email|udf1..udf5|<5 empty>|salt`
    pub fn hash_sequence(&self, credentials: &MerchantCredentials) -> String {
        let amount = self.amount.to_string();
        let head = [
            credentials.key(),
            self.txnid.as_str(),
            amount.as_str(),
            self.productinfo.as_str(),
            self.firstname.as_str(),
            self.email.as_str(),
        ];
        hash_sequence(
            head.into_iter()
                .chain(self.udf.ascending())
                .chain(std::iter::repeat_n("", RESERVED_SLOTS))
                .chain(std::iter::once(credentials.salt())),
        )
    }
}

impl TryFrom<PaymentData> for PaymentRequest {
    type Error = PaymentError;

    fn try_from(data: PaymentData) -> Result<Self> {
        let txnid = required_text(data.txnid, "txnid");
        let amount = required_amount(data.amount);
        let productinfo = required_text(data.productinfo, "productinfo");
        let firstname = required_text(data.firstname, "firstname");
        let email = required_text(data.email, "email");

        let (txnid, amount, productinfo, firstname, email) =
            (txnid?, amount?, productinfo?, firstname?, email?);

        Ok(Self {
            txnid,
            amount: amount.parse()?,
            productinfo,
            firstname,
            email,
            udf: UserDefinedFields::from_wire([
                data.udf1, data.udf2, data.udf3, data.udf4, data.udf5,
            ]),
        })
    }
}

/// A validated gateway response whose hash is to be checked.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentCallback {
    pub hash: String,
    pub status: String,
    pub txnid: String,
    pub amount: Amount,
    pub email: String,
    pub firstname: String,
    pub productinfo: String,
    pub udf: UserDefinedFields,
}

impl PaymentCallback {
    /// `salt|status|udf5..udf1|email|firstname|productinfo|amount|txnid|key`
    pub fn hash_sequence(&self, credentials: &MerchantCredentials) -> String {
        let amount = self.amount.to_string();
        let tail = [
            self.email.as_str(),
            self.firstname.as_str(),
            self.productinfo.as_str(),
            amount.as_str(),
            self.txnid.as_str(),
            credentials.key(),
        ];
        hash_sequence(
            [credentials.salt(), self.status.as_str()]
                .into_iter()
                .chain(self.udf.descending())
                .chain(tail),
        )
    }
}

impl TryFrom<CallbackParams> for PaymentCallback {
    type Error = PaymentError;

    fn try_from(params: CallbackParams) -> Result<Self> {
        let hash = required_text(params.hash, "hash");
        let status = required_text(params.status, "status");
        let txnid = required_text(params.txnid, "txnid");
        let amount = required_amount(params.amount);

        let (hash, status, txnid, amount) = (hash?, status?, txnid?, amount?);

        Ok(Self {
            hash,
            status,
            txnid,
            amount: amount.parse()?,
            email: params.email.unwrap_or_default(),
            firstname: params.firstname.unwrap_or_default(),
            productinfo: params.productinfo.unwrap_or_default(),
            udf: UserDefinedFields::from_wire([
                params.udf1,
                params.udf2,
                params.udf3,
                params.udf4,
                params.udf5,
            ]),
        })
    }
}

/// Accepts a JSON string or number; numbers keep their JSON spelling.
fn text_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Field>::deserialize(deserializer)?.map(|field| match field {
        Field::Text(text) => text,
        Field::Number(number) => number.to_string(),
    }))
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(PaymentError::MissingField(field))
}

fn required_amount(value: Option<RawAmount>) -> Result<RawAmount> {
    value
        .filter(|v| !v.is_blank())
        .ok_or(PaymentError::MissingField("amount"))
}
