use mongodb::bson::{oid::ObjectId, Bson};
use serde::{Deserialize, Serialize};

/// Registro de aluno/colocação exposto pela API (JSON camelCase)
///
/// Todos os campos são opcionais e sem validação; `userId` é gerado pelo
/// MongoDB no primeiro `save`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub roll_number: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub placement_status: Option<String>,
    pub company: Option<String>,
    /// Texto livre, não é uma data parseada
    pub placement_date: Option<String>,
}

impl User {
    pub fn new(name: impl Into<String>, roll_number: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            roll_number: Some(roll_number.into()),
            ..Default::default()
        }
    }
}

/// Documento armazenado na collection `users`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<Bson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roll_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_date: Option<String>,
}

impl From<UserDocument> for User {
    fn from(d: UserDocument) -> Self {
        User {
            user_id: d.id.as_ref().map(user_id_to_string),
            name: d.name,
            roll_number: d.roll_number,
            email: d.email,
            phone: d.phone,
            placement_status: d.placement_status,
            company: d.company,
            placement_date: d.placement_date,
        }
    }
}

impl From<User> for UserDocument {
    fn from(u: User) -> Self {
        UserDocument {
            id: u.user_id.as_deref().map(user_id_bson),
            name: u.name,
            roll_number: u.roll_number,
            email: u.email,
            phone: u.phone,
            placement_status: u.placement_status,
            company: u.company,
            placement_date: u.placement_date,
        }
    }
}

/// `_id` de um userId: ObjectId quando o texto é hex válido, senão a string como veio
pub fn user_id_bson(raw: &str) -> Bson {
    match ObjectId::parse_str(raw) {
        Ok(object_id) => Bson::ObjectId(object_id),
        Err(_) => Bson::String(raw.to_string()),
    }
}

pub fn user_id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(object_id) => object_id.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Request para atualização parcial (PUT /api/users/{id})
///
/// Só campos presentes e não-nulos sobrescrevem o registro. Não existe forma
/// de limpar um campo para null por aqui.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub roll_number: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub placement_status: Option<String>,
    pub company: Option<String>,
    pub placement_date: Option<String>,
}

impl UpdateUserRequest {
    pub fn apply_to(self, user: &mut User) {
        if let Some(name) = self.name { user.name = Some(name); }
        if let Some(roll_number) = self.roll_number { user.roll_number = Some(roll_number); }
        if let Some(email) = self.email { user.email = Some(email); }
        if let Some(phone) = self.phone { user.phone = Some(phone); }
        if let Some(placement_status) = self.placement_status { user.placement_status = Some(placement_status); }
        if let Some(company) = self.company { user.company = Some(company); }
        if let Some(placement_date) = self.placement_date { user.placement_date = Some(placement_date); }
    }
}
