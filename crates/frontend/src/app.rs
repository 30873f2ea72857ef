use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_client::ui::details::ClientDetailPage;
use crate::domain::a001_client::ui::list::ClientList;
use crate::domain::a002_provider::ui::details::ProviderDetailPage;
use crate::domain::a002_provider::ui::list::ProviderList;
use crate::domain::a003_article::ui::details::ArticleDetailPage;
use crate::domain::a003_article::ui::list::ArticleList;
use crate::domain::a004_sale::ui::details::SaleDetailPage;
use crate::domain::a004_sale::ui::list::SaleList;
use crate::domain::a005_stock_movement::ui::details::StockMovementDetailPage;
use crate::domain::a005_stock_movement::ui::list::StockMovementList;
use crate::layout::MainLayout;
use crate::shared::notification::{NotificationHost, Notifier};
use crate::system::auth::{provide_auth, RequirePermission};
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_available::NotAvailablePage;
use crate::system::pages::unauthorized::UnauthorizedPage;
use crate::system::users::ui::details::UserDetailPage;
use crate::system::users::ui::list::UserList;

#[component]
pub fn App() -> impl IntoView {
    // session restored from localStorage before the first render
    provide_auth();
    provide_context(Notifier::new());

    view! {
        <Router>
            <MainLayout>
                <Routes fallback=|| view! { <p class="page__message">"Página no encontrada"</p> }>
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/unauthorized") view=UnauthorizedPage />
                    <Route
                        path=path!("/")
                        view=|| view! { <RequirePermission><HomePage /></RequirePermission> }
                    />

                    <ParentRoute
                        path=path!("/clientes")
                        view=|| view! { <RequirePermission permission="clientes.ver"><Outlet /></RequirePermission> }
                    >
                        <Route path=path!("") view=ClientList />
                        <Route
                            path=path!("nuevo")
                            view=|| view! { <RequirePermission permission="clientes.crear"><NotAvailablePage entity="clientes" /></RequirePermission> }
                        />
                        <Route
                            path=path!("editar/:id")
                            view=|| view! { <RequirePermission permission="clientes.editar"><NotAvailablePage entity="clientes" /></RequirePermission> }
                        />
                        <Route path=path!(":id") view=ClientDetailPage />
                    </ParentRoute>

                    <ParentRoute
                        path=path!("/proveedores")
                        view=|| view! { <RequirePermission permission="proveedores.ver"><Outlet /></RequirePermission> }
                    >
                        <Route path=path!("") view=ProviderList />
                        <Route
                            path=path!("nuevo")
                            view=|| view! { <RequirePermission permission="proveedores.crear"><NotAvailablePage entity="proveedores" /></RequirePermission> }
                        />
                        <Route
                            path=path!("editar/:id")
                            view=|| view! { <RequirePermission permission="proveedores.editar"><NotAvailablePage entity="proveedores" /></RequirePermission> }
                        />
                        <Route path=path!(":id") view=ProviderDetailPage />
                    </ParentRoute>

                    <ParentRoute
                        path=path!("/articulos")
                        view=|| view! { <RequirePermission permission="articulos.ver"><Outlet /></RequirePermission> }
                    >
                        <Route path=path!("") view=ArticleList />
                        <Route
                            path=path!("nuevo")
                            view=|| view! { <RequirePermission permission="articulos.crear"><NotAvailablePage entity="articulos" /></RequirePermission> }
                        />
                        <Route
                            path=path!("editar/:id")
                            view=|| view! { <RequirePermission permission="articulos.editar"><NotAvailablePage entity="articulos" /></RequirePermission> }
                        />
                        <Route path=path!(":id") view=ArticleDetailPage />
                    </ParentRoute>

                    <ParentRoute
                        path=path!("/ventas")
                        view=|| view! { <RequirePermission permission="ventas.ver"><Outlet /></RequirePermission> }
                    >
                        <Route path=path!("") view=SaleList />
                        <Route
                            path=path!("nuevo")
                            view=|| view! { <RequirePermission permission="ventas.crear"><NotAvailablePage entity="ventas" /></RequirePermission> }
                        />
                        <Route
                            path=path!("editar/:id")
                            view=|| view! { <RequirePermission permission="ventas.editar"><NotAvailablePage entity="ventas" /></RequirePermission> }
                        />
                        <Route path=path!(":id") view=SaleDetailPage />
                    </ParentRoute>

                    // stock movements have no edit route
                    <ParentRoute
                        path=path!("/movimientos")
                        view=|| view! { <RequirePermission permission="movimientos.ver"><Outlet /></RequirePermission> }
                    >
                        <Route path=path!("") view=StockMovementList />
                        <Route
                            path=path!("nuevo")
                            view=|| view! { <RequirePermission permission="movimientos.crear"><NotAvailablePage entity="movimientos" /></RequirePermission> }
                        />
                        <Route path=path!(":id") view=StockMovementDetailPage />
                    </ParentRoute>

                    <ParentRoute
                        path=path!("/usuarios")
                        view=|| view! { <RequirePermission permission="usuarios.ver"><Outlet /></RequirePermission> }
                    >
                        <Route path=path!("") view=UserList />
                        <Route
                            path=path!("nuevo")
                            view=|| view! { <RequirePermission permission="usuarios.crear"><NotAvailablePage entity="usuarios" /></RequirePermission> }
                        />
                        <Route
                            path=path!("editar/:id")
                            view=|| view! { <RequirePermission permission="usuarios.editar"><NotAvailablePage entity="usuarios" /></RequirePermission> }
                        />
                        <Route path=path!(":id") view=UserDetailPage />
                    </ParentRoute>
                </Routes>
            </MainLayout>
            <NotificationHost />
        </Router>
    }
}
