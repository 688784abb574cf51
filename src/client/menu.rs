//! Menu flows of the console client.

use std::io::{BufRead, Write};

use crate::{
    client::{api::ApiClient, console::Console, error::ClientError, render},
    model::{
        api::ApiIndexDto,
        ingredient::IngredientDto,
        mason::{rel, Collection, Control, Envelope},
        recipe::{
            Difficulty, NewRecipeDto, RecipeDto, RecipeFieldsDto, RecipeIngredientDto,
            RecipeSummaryDto,
        },
        user::UserDto,
    },
};

static MAIN_MENU: [&str; 6] = [
    "Create user",
    "Select user",
    "Delete user",
    "List users",
    "List ingredients",
    "Exit",
];

static RECIPE_MENU: [&str; 5] = [
    "Add recipe",
    "List recipes",
    "Inspect recipe",
    "Delete recipe",
    "Back",
];

fn control<'e, T>(envelope: &'e Envelope<T>, relation: &str) -> Result<&'e Control, ClientError> {
    envelope
        .control(relation)
        .ok_or_else(|| ClientError::MissingControl(relation.to_string()))
}

/// Menu driven client, generic over the console's input and output
pub struct CookbookClient<R, W> {
    api: ApiClient,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> CookbookClient<R, W> {
    pub fn new(api: ApiClient, console: Console<R, W>) -> Self {
        Self { api, console }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Runs the main menu until the user exits
    ///
    /// API errors are shown and the menu continues. Console failures, including end of input,
    /// end the session with an error.
    pub async fn run(&mut self) -> Result<(), ClientError> {
        let entry = self.api.entry().await?;
        self.console
            .line(&format!("Connected to {}", entry.body.title))?;

        loop {
            let result = match self.console.choose("Main menu", &MAIN_MENU)? {
                0 => self.create_user(&entry).await,
                1 => self.select_user(&entry).await,
                2 => self.delete_user(&entry).await,
                3 => self.list_users(&entry).await,
                4 => self.list_ingredients(&entry).await,
                _ => return Ok(()),
            };

            self.report(result)?;
        }
    }

    fn report(&mut self, result: Result<(), ClientError>) -> Result<(), ClientError> {
        match result {
            Ok(()) => Ok(()),
            Err(err @ (ClientError::InputClosed | ClientError::Io(_))) => Err(err),
            Err(err) => self.console.line(&render::error(&err)),
        }
    }

    async fn users(
        &self,
        entry: &Envelope<ApiIndexDto>,
    ) -> Result<Envelope<Collection<UserDto>>, ClientError> {
        let all = control(entry, rel::USERS_ALL)?;
        self.api.get(&all.href).await
    }

    async fn create_user(&mut self, entry: &Envelope<ApiIndexDto>) -> Result<(), ClientError> {
        let users = self.users(entry).await?;
        let add = control(&users, rel::ADD_USER)?;

        let user = UserDto {
            name: self.console.prompt_required("Name")?,
            email: self.console.prompt_required("Email")?,
            address: self.console.prompt_required("Address")?,
            password: self.console.prompt_required("Password")?,
        };

        self.api
            .submit(add, Some(&serde_json::to_value(&user)?))
            .await?;

        self.console.line(&format!("User {} created.", user.name))
    }

    /// Lets the user pick one user and fetches it, `None` when there are no users
    async fn pick_user(
        &mut self,
        entry: &Envelope<ApiIndexDto>,
    ) -> Result<Option<Envelope<UserDto>>, ClientError> {
        let users = self.users(entry).await?;
        if users.body.items.is_empty() {
            self.console.line("No users.")?;
            return Ok(None);
        }

        let names: Vec<&str> = users
            .body
            .items
            .iter()
            .map(|user| user.body.name.as_str())
            .collect();
        let index = self.console.choose("Select a user", &names)?;

        let item = control(&users.body.items[index], rel::SELF)?;
        Ok(Some(self.api.get(&item.href).await?))
    }

    async fn select_user(&mut self, entry: &Envelope<ApiIndexDto>) -> Result<(), ClientError> {
        match self.pick_user(entry).await? {
            Some(user) => {
                self.console.line(&render::user(&user.body))?;
                self.recipe_menu(&user).await
            }
            None => Ok(()),
        }
    }

    async fn delete_user(&mut self, entry: &Envelope<ApiIndexDto>) -> Result<(), ClientError> {
        let Some(user) = self.pick_user(entry).await? else {
            return Ok(());
        };

        if !self
            .console
            .confirm(&format!("Delete {} and all their recipes?", user.body.name))?
        {
            return Ok(());
        }

        self.api.submit(control(&user, rel::DELETE)?, None).await?;

        self.console
            .line(&format!("User {} deleted.", user.body.name))
    }

    async fn list_users(&mut self, entry: &Envelope<ApiIndexDto>) -> Result<(), ClientError> {
        let users = self.users(entry).await?;

        self.console.line(&render::users(&users.body))
    }

    async fn list_ingredients(
        &mut self,
        entry: &Envelope<ApiIndexDto>,
    ) -> Result<(), ClientError> {
        let all = control(entry, rel::INGREDIENTS_ALL)?;
        let ingredients: Envelope<Collection<IngredientDto>> = self.api.get(&all.href).await?;

        self.console.line(&render::ingredients(&ingredients.body))
    }

    async fn recipe_menu(&mut self, user: &Envelope<UserDto>) -> Result<(), ClientError> {
        let title = format!("Recipes of {}", user.body.name);

        loop {
            let result = match self.console.choose(&title, &RECIPE_MENU)? {
                0 => self.add_recipe(user).await,
                1 => self.list_recipes(user).await,
                2 => self.inspect_recipe(user).await,
                3 => self.delete_recipe(user).await,
                _ => return Ok(()),
            };

            self.report(result)?;
        }
    }

    async fn recipes(
        &self,
        user: &Envelope<UserDto>,
    ) -> Result<Envelope<Collection<RecipeSummaryDto>>, ClientError> {
        let recipes = control(user, rel::USER_RECIPES)?;
        self.api.get(&recipes.href).await
    }

    async fn add_recipe(&mut self, user: &Envelope<UserDto>) -> Result<(), ClientError> {
        let recipes = self.recipes(user).await?;
        let add = control(&recipes, rel::ADD_RECIPE)?;

        let name = self.console.prompt_required("Recipe name")?;
        let description = self.console.prompt_required("Description")?;

        let difficulties: Vec<Difficulty> = Difficulty::ALL
            .into_iter()
            .chain([Difficulty::Undefined])
            .collect();
        let labels: Vec<&str> = difficulties.iter().map(Difficulty::as_str).collect();
        let difficulty = difficulties[self.console.choose("Difficulty", &labels)?];

        let mut ingredients = Vec::new();
        while self.console.confirm("Add an ingredient?")? {
            ingredients.push(RecipeIngredientDto {
                name: self.console.prompt_required("Ingredient")?,
                amount: self.console.prompt_integer("Amount")?,
                unit: self.console.prompt_required("Unit")?,
            });
        }

        let new_recipe = NewRecipeDto {
            recipe: RecipeFieldsDto {
                name,
                description,
                difficulty: Some(difficulty.as_str().to_string()),
            },
            ingredients,
        };

        self.api
            .submit(add, Some(&serde_json::to_value(&new_recipe)?))
            .await?;

        self.console
            .line(&format!("Recipe {} added.", new_recipe.recipe.name))
    }

    async fn list_recipes(&mut self, user: &Envelope<UserDto>) -> Result<(), ClientError> {
        let recipes = self.recipes(user).await?;

        self.console.line(&render::recipes(&recipes.body))
    }

    /// Lets the user pick one of `user`'s recipes and fetches it in full
    async fn pick_recipe(
        &mut self,
        user: &Envelope<UserDto>,
    ) -> Result<Option<Envelope<RecipeDto>>, ClientError> {
        let recipes = self.recipes(user).await?;
        if recipes.body.items.is_empty() {
            self.console.line("No recipes.")?;
            return Ok(None);
        }

        let names: Vec<&str> = recipes
            .body
            .items
            .iter()
            .map(|recipe| recipe.body.name.as_str())
            .collect();
        let index = self.console.choose("Select a recipe", &names)?;

        let item = control(&recipes.body.items[index], rel::SELF)?;
        Ok(Some(self.api.get(&item.href).await?))
    }

    async fn inspect_recipe(&mut self, user: &Envelope<UserDto>) -> Result<(), ClientError> {
        match self.pick_recipe(user).await? {
            Some(recipe) => self.console.line(&render::recipe(&recipe.body)),
            None => Ok(()),
        }
    }

    async fn delete_recipe(&mut self, user: &Envelope<UserDto>) -> Result<(), ClientError> {
        let Some(recipe) = self.pick_recipe(user).await? else {
            return Ok(());
        };

        self.api.submit(control(&recipe, rel::DELETE)?, None).await?;

        self.console
            .line(&format!("Recipe {} deleted.", recipe.body.name))
    }
}
